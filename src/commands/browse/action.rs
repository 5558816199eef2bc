//! Browse actions: one per input line

use std::path::PathBuf;

use parcelbook_core::error::{CatalogError, Result};
use parcelbook_core::export::ExportKind;
use parcelbook_core::session::FilterInput;

/// A UI event fed into the session
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction {
    /// Set one filter input; an empty value clears it
    Filter(FilterInput, String),
    /// Set both bounds of a range filter
    Range {
        min: (FilterInput, String),
        max: (FilterInput, String),
    },
    Reset,
    More,
    /// 1-based position in the visible window
    Select(usize),
    Show,
    Draft,
    Generate(Option<String>),
    Edit(String),
    Link(String),
    SaveDescription,
    SaveLink,
    OpenLink,
    Export(ExportKind, Option<PathBuf>),
    Quit,
}

impl BrowseAction {
    /// Short name used in status output
    pub fn name(&self) -> &'static str {
        match self {
            BrowseAction::Filter(..) | BrowseAction::Range { .. } => "filter",
            BrowseAction::Reset => "reset",
            BrowseAction::More => "more",
            BrowseAction::Select(_) => "select",
            BrowseAction::Show => "show",
            BrowseAction::Draft => "draft",
            BrowseAction::Generate(_) => "generate",
            BrowseAction::Edit(_) => "edit",
            BrowseAction::Link(_) => "link",
            BrowseAction::SaveDescription => "save-description",
            BrowseAction::SaveLink => "save-link",
            BrowseAction::OpenLink => "open-link",
            BrowseAction::Export(..) => "export",
            BrowseAction::Quit => "quit",
        }
    }
}

/// `-` stands for an empty bound
fn bound(token: Option<&str>) -> String {
    match token {
        Some("-") | None => String::new(),
        Some(value) => value.to_string(),
    }
}

fn range(rest: &str, min: FilterInput, max: FilterInput) -> BrowseAction {
    let mut tokens = rest.split_whitespace();
    BrowseAction::Range {
        min: (min, bound(tokens.next())),
        max: (max, bound(tokens.next())),
    }
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<BrowseAction>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let optional = |text: &str| Some(text.to_string()).filter(|t| !t.is_empty());

    let action = match verb.to_lowercase().as_str() {
        "region" => BrowseAction::Filter(FilterInput::Region, rest.to_string()),
        "cadastral" => BrowseAction::Filter(FilterInput::Cadastral, rest.to_string()),
        "article" => BrowseAction::Filter(FilterInput::Article, rest.to_string()),
        "area" => range(rest, FilterInput::AreaMin, FilterInput::AreaMax),
        "price" => range(rest, FilterInput::PriceMin, FilterInput::PriceMax),
        "reset" => BrowseAction::Reset,
        "more" => BrowseAction::More,
        "select" => {
            let position: usize = rest
                .parse()
                .map_err(|_| CatalogError::invalid_value("row number", rest))?;
            if position == 0 {
                return Err(CatalogError::invalid_value("row number", rest));
            }
            BrowseAction::Select(position)
        }
        "show" => BrowseAction::Show,
        "draft" => BrowseAction::Draft,
        "generate" => BrowseAction::Generate(optional(rest)),
        "edit" => BrowseAction::Edit(rest.replace("\\n", "\n")),
        "link" => BrowseAction::Link(rest.to_string()),
        "save-description" => BrowseAction::SaveDescription,
        "save-link" => BrowseAction::SaveLink,
        "open-link" => BrowseAction::OpenLink,
        "export" => {
            let mut tokens = rest.splitn(2, char::is_whitespace);
            let kind = tokens.next().unwrap_or_default().parse::<ExportKind>()?;
            let dir = tokens.next().map(str::trim).filter(|d| !d.is_empty());
            BrowseAction::Export(kind, dir.map(PathBuf::from))
        }
        "quit" | "exit" => BrowseAction::Quit,
        other => {
            return Err(CatalogError::UsageError(format!(
                "unknown browse action: {}",
                other
            )))
        }
    };
    Ok(Some(action))
}
