//! Dashboard layout
//!
//! Static element tree for the single dashboard page. Built once from the
//! loaded dataset (for the year options) and never changed afterwards.
//! Serializes to JSON for `/api/v1/layout` and renders to the HTML page.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::data::{FireDataset, Region};

pub const DASHBOARD_TITLE: &str = "Australia Wildfire Dashboard";
pub const DEFAULT_REGION: Region = Region::NewSouthWales;
pub const DEFAULT_YEAR: i32 = 2005;

pub const REGION_SELECTOR_ID: &str = "region";
pub const YEAR_SELECTOR_ID: &str = "year";
pub const FIRE_AREA_PLOT_ID: &str = "plot1";
pub const PIXEL_COUNT_PLOT_ID: &str = "plot2";

const PLOTLY_SCRIPT_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const DASHBOARD_SCRIPT_PATH: &str = "/assets/dashboard.js";

/// Inline CSS properties, kept sorted for stable output
pub type Style = BTreeMap<String, String>;

fn style(pairs: &[(&str, &str)]) -> Style {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A label/value pair offered by a selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// UI element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Element {
    Heading {
        level: u8,
        text: String,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        style: Style,
    },
    Container {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        style: Style,
        children: Vec<Element>,
    },
    RadioItems {
        id: String,
        options: Vec<SelectOption>,
        value: String,
        inline: bool,
    },
    Dropdown {
        id: String,
        options: Vec<SelectOption>,
        value: Option<String>,
    },
}

impl Element {
    fn container(children: Vec<Element>) -> Self {
        Element::Container {
            id: None,
            style: Style::new(),
            children,
        }
    }

    fn output(id: &str) -> Self {
        Element::Container {
            id: Some(id.to_string()),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    /// Depth-first search by id
    pub fn find(&self, wanted: &str) -> Option<&Element> {
        match self {
            Element::Container { id, children, .. } => {
                if id.as_deref() == Some(wanted) {
                    return Some(self);
                }
                children.iter().find_map(|c| c.find(wanted))
            }
            Element::RadioItems { id, .. } | Element::Dropdown { id, .. } if id == wanted => {
                Some(self)
            }
            _ => None,
        }
    }
}

/// Whole page description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub root: Element,
}

/// Build the dashboard layout
///
/// Year options are the dataset's distinct years in first-seen order. The
/// default year is not checked against them.
pub fn build_layout(dataset: &FireDataset) -> Layout {
    let region_options = Region::all()
        .iter()
        .map(|r| SelectOption {
            label: r.label().to_string(),
            value: r.code().to_string(),
        })
        .collect();

    let year_options = dataset
        .years()
        .iter()
        .map(|y| SelectOption {
            label: y.to_string(),
            value: y.to_string(),
        })
        .collect();

    let root = Element::container(vec![
        Element::Heading {
            level: 1,
            text: DASHBOARD_TITLE.to_string(),
            style: style(&[
                ("text-align", "center"),
                ("color", "#503D36"),
                ("font-size", "26px"),
            ]),
        },
        Element::container(vec![
            Element::container(vec![
                Element::Heading {
                    level: 2,
                    text: "Select Region:".to_string(),
                    style: style(&[("margin-right", "2em")]),
                },
                Element::RadioItems {
                    id: REGION_SELECTOR_ID.to_string(),
                    options: region_options,
                    value: DEFAULT_REGION.code().to_string(),
                    inline: true,
                },
            ]),
            Element::container(vec![
                Element::Heading {
                    level: 2,
                    text: "Select Year:".to_string(),
                    style: style(&[("margin-right", "2em")]),
                },
                Element::Dropdown {
                    id: YEAR_SELECTOR_ID.to_string(),
                    options: year_options,
                    value: Some(DEFAULT_YEAR.to_string()),
                },
            ]),
            Element::Container {
                id: None,
                style: style(&[("display", "flex")]),
                children: vec![
                    Element::output(FIRE_AREA_PLOT_ID),
                    Element::output(PIXEL_COUNT_PLOT_ID),
                ],
            },
        ]),
    ]);

    Layout {
        title: DASHBOARD_TITLE.to_string(),
        root,
    }
}

impl Layout {
    /// Render the full HTML document
    pub fn render_html(&self) -> String {
        let mut body = String::new();
        render_element(&self.root, &mut body);

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
             <script src=\"{plotly}\"></script>\n</head>\n<body>\n{body}\n\
             <script src=\"{script}\"></script>\n</body>\n</html>\n",
            title = escape_html(&self.title),
            plotly = PLOTLY_SCRIPT_URL,
            body = body,
            script = DASHBOARD_SCRIPT_PATH,
        )
    }
}

fn render_element(element: &Element, out: &mut String) {
    // Writing into a String cannot fail.
    match element {
        Element::Heading { level, text, style } => {
            let _ = write!(
                out,
                "<h{level}{}>{}</h{level}>",
                style_attr(style),
                escape_html(text),
            );
        }
        Element::Container { id, style, children } => {
            out.push_str("<div");
            if let Some(id) = id {
                let _ = write!(out, " id=\"{}\"", escape_html(id));
            }
            out.push_str(&style_attr(style));
            out.push('>');
            for child in children {
                render_element(child, out);
            }
            out.push_str("</div>");
        }
        Element::RadioItems {
            id,
            options,
            value,
            inline,
        } => {
            let display = if *inline { "inline-block" } else { "block" };
            let _ = write!(out, "<div id=\"{}\">", escape_html(id));
            for option in options {
                let checked = if &option.value == value { " checked" } else { "" };
                let _ = write!(
                    out,
                    "<label style=\"display: {display}\"><input type=\"radio\" name=\"{}\" value=\"{}\"{checked}>{}</label>",
                    escape_html(id),
                    escape_html(&option.value),
                    escape_html(&option.label),
                );
            }
            out.push_str("</div>");
        }
        Element::Dropdown { id, options, value } => {
            let current = value.as_deref().unwrap_or("");
            let _ = write!(
                out,
                "<select id=\"{}\" data-value=\"{}\"><option value=\"\">Select...</option>",
                escape_html(id),
                escape_html(current),
            );
            for option in options {
                let selected = if option.value == current { " selected" } else { "" };
                let _ = write!(
                    out,
                    "<option value=\"{}\"{selected}>{}</option>",
                    escape_html(&option.value),
                    escape_html(&option.label),
                );
            }
            out.push_str("</select>");
        }
    }
}

fn style_attr(style: &Style) -> String {
    if style.is_empty() {
        return String::new();
    }
    let css: Vec<String> = style.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
    format!(" style=\"{}\"", escape_html(&css.join("; ")))
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
