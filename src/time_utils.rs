use js_sys::Date;
use wasm_bindgen::JsValue;

/// Local wall-clock time of day, `HH:MM:SS`
pub fn format_local_time(timestamp: u64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    format!("{:02}:{:02}:{:02}", date.get_hours(), date.get_minutes(), date.get_seconds())
}

/// Local time with milliseconds, `HH:MM:SS.mmm`, for log lines
pub fn format_log_time(timestamp: u64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds(),
        date.get_milliseconds()
    )
}

pub fn now_millis() -> u64 {
    Date::now() as u64
}
