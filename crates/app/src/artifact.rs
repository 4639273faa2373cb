use heatmap_engine::xml_escape;

/// Small standalone SVG shown in place of the heatmap when no series can
/// be rendered.
pub fn error_svg(message: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="40"><text x="10" y="25" fill="red">{}</text></svg>"#,
        xml_escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_message() {
        let svg = error_svg("data.json <missing>");
        assert!(svg.contains(">data.json &lt;missing&gt;</text>"));
        assert!(svg.starts_with("<svg"));
    }
}
