/// Static description of a page-style example's landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    /// Document `<title>`.
    pub title: &'static str,
    /// `<meta name="description">` content.
    pub description: &'static str,
    pub heading: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

const MAIN_STYLE: &str = "padding: 2rem; font-family: system-ui, sans-serif";

impl PageContent {
    /// Renders the page as a complete HTML document.
    pub fn render(&self) -> String {
        let items: String = self
            .features
            .iter()
            .map(|feature| format!("        <li>{}</li>\n", feature))
            .collect();

        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "  <head>\n",
                "    <meta charset=\"utf-8\">\n",
                "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "    <title>{title}</title>\n",
                "    <meta name=\"description\" content=\"{description}\">\n",
                "  </head>\n",
                "  <body>\n",
                "    <main style=\"{style}\">\n",
                "      <h1>{heading}</h1>\n",
                "      <p>{summary}</p>\n",
                "      <ul>\n",
                "{items}",
                "      </ul>\n",
                "    </main>\n",
                "  </body>\n",
                "</html>\n",
            ),
            title = self.title,
            description = self.description,
            style = MAIN_STYLE,
            heading = self.heading,
            summary = self.summary,
            items = items,
        )
    }
}
