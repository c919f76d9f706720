// Console logging and display formatting shared by the components

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    eprintln!("{}", msg);
}

#[cfg(target_arch = "wasm32")]
pub fn cerr(msg: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cerr(msg: &str) {
    eprintln!("error: {}", msg);
}

/// Blocking notice; falls back to the console when there is no window.
pub fn alert(msg: &str) {
    match web_sys::window() {
        Some(win) => {
            let _ = win.alert_with_message(msg);
        }
        None => cerr(msg),
    }
}

/// Whole taps only; fractional passive income accrues invisibly.
pub fn format_taps(taps: f64) -> String {
    format!("{}", taps.floor() as i64)
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.1}", rate)
}

/// Integers without a trailing `.0`, anything else as-is.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

pub fn shop_line(name: &str, owned: u32, cost: f64) -> String {
    format!("{} ({}) - Cost: {} taps", name, owned, format_number(cost))
}

pub fn task_line(description: &str, progress: f64, target: f64) -> String {
    format!(
        "{} - Progress: {}/{}",
        description,
        format_number(progress),
        format_number(target)
    )
}

/// `rank` is zero-based position in the server's ordering.
pub fn leaderboard_line(rank: usize, name: &str, taps: f64) -> String {
    format!("{}. {} - {} taps", rank + 1, name, format_taps(taps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_floor_taps_and_round_rate() {
        assert_eq!(format_taps(0.0), "0");
        assert_eq!(format_taps(12.99), "12");
        assert_eq!(format_rate(5.2), "5.2");
        assert_eq!(format_rate(0.0), "0.0");
        assert_eq!(format_rate(0.30000000000000004), "0.3");
    }

    #[test]
    fn numbers_drop_integral_fraction() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-4.0), "-4");
    }

    #[test]
    fn row_texts() {
        assert_eq!(
            shop_line("Double Tap", 2, 500.0),
            "Double Tap (2) - Cost: 500 taps"
        );
        assert_eq!(
            task_line("Tap 100 times", 40.0, 100.0),
            "Tap 100 times - Progress: 40/100"
        );
        assert_eq!(leaderboard_line(0, "alice", 1234.9), "1. alice - 1234 taps");
    }
}
