use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Speed is the one fractional stat; keep it at two decimals so the HUD
/// column stays aligned.
pub fn format_speed(speed: f64) -> String {
    format!("{:.2}", speed)
}

#[cfg(test)]
mod tests {
    use super::format_speed;

    #[test]
    fn speed_renders_two_decimals() {
        assert_eq!(format_speed(0.04), "0.04");
        assert_eq!(format_speed(1.0), "1.00");
    }
}
