//! Battery Indicator Component

use leptos::*;

/// Battery level badge; renders nothing until a level is known
#[component]
pub fn BatteryIndicator(#[prop(into)] level: Signal<Option<u8>>) -> impl IntoView {
    move || {
        level.get().map(|percent| {
            let color = battery_color(percent);
            view! {
                <span
                    class=format!("flex items-center gap-1 text-sm {}", color)
                    title="Battery level"
                >
                    "🔋 " {format!("{}%", percent)}
                </span>
            }
        })
    }
}

/// Text color for a battery percentage
pub fn battery_color(percent: u8) -> &'static str {
    match percent {
        0..=20 => "text-red-400",
        21..=50 => "text-yellow-400",
        _ => "text-green-400",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_color_thresholds() {
        assert_eq!(battery_color(5), "text-red-400");
        assert_eq!(battery_color(20), "text-red-400");
        assert_eq!(battery_color(21), "text-yellow-400");
        assert_eq!(battery_color(100), "text-green-400");
    }
}
