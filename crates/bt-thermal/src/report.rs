use crate::heatsink::HeatsinkResult;

pub const BANNER: &str = "-- Heat Sink Thermal Resistance Calculator -- ";
pub const RESULTS_HEADER: &str = "-- Results -- ";

const UNIT: &str = "\u{b0}C/W";

/// The two result lines, each newline terminated, values to 2 decimal places.
pub fn render_report(result: &HeatsinkResult) -> String {
    format!(
        "Rja = {:.2} {UNIT}\nRsa = {:.2} {UNIT}\n",
        result.r_junction_ambient, result.r_sink_ambient
    )
}
