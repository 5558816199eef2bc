//! `parcelbook browse` command - line-driven catalog session
//!
//! Each input line is one UI event. The action settles before the next
//! line is read, and the resulting view is printed after every action.

pub mod action;

use std::io::BufRead;
use std::path::Path;

use chrono::Local;
use parcelbook_core::error::{CatalogError, Result};
use parcelbook_core::format::escape_quotes;
use parcelbook_core::session::{ActionStatus, Session};
use serde_json::json;
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_records_data, wrap_records_body};
use crate::commands::list::print_window;
use crate::commands::show::print_detail;

pub use action::{parse_line, BrowseAction};

/// What to print after an action settled
enum View {
    Window,
    Detail,
    Draft,
    Status,
}

/// Execute the browse command
pub fn execute<R: BufRead>(ctx: &CommandContext, input: R, export_dir: &Path) -> Result<()> {
    let mut session = ctx.session()?;
    let format = ctx.cli.format;

    if !ctx.cli.quiet && format == OutputFormat::Human {
        println!(
            "{} parcels loaded, {} notes",
            session.store().len(),
            session.notes().len()
        );
    }
    print_window(format, true, &session)?;

    for line in input.lines() {
        let line = line?;
        let action = match parse_line(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                report_error(format, &e);
                continue;
            }
        };
        if action == BrowseAction::Quit {
            break;
        }

        debug!(action = action.name(), "browse_action");
        let (status, view) = apply(&mut session, action.clone(), export_dir);
        print_outcome(format, &session, &action, status.as_ref(), view)?;
    }

    Ok(())
}

fn apply(
    session: &mut Session,
    action: BrowseAction,
    export_dir: &Path,
) -> (Option<ActionStatus>, View) {
    match action {
        BrowseAction::Filter(input, value) => {
            session.set_filter(input, &value);
            (None, View::Window)
        }
        BrowseAction::Range { min, max } => {
            session.set_filter(min.0, &min.1);
            session.set_filter(max.0, &max.1);
            (None, View::Window)
        }
        BrowseAction::Reset => {
            session.reset();
            (None, View::Window)
        }
        BrowseAction::More => {
            session.load_more();
            (None, View::Window)
        }
        BrowseAction::Select(position) => match session.select_visible(position - 1) {
            Some(_) => (None, View::Detail),
            None => (Some(ActionStatus::NoSelection), View::Status),
        },
        BrowseAction::Show => (None, View::Detail),
        BrowseAction::Draft => (Some(session.generate_local_draft()), View::Draft),
        BrowseAction::Generate(instruction) => {
            (Some(session.generate_ai(instruction.as_deref())), View::Draft)
        }
        BrowseAction::Edit(text) => {
            session.edit_draft(&text);
            (None, View::Draft)
        }
        BrowseAction::Link(text) => {
            session.edit_link(&text);
            (None, View::Status)
        }
        BrowseAction::SaveDescription => (Some(session.save_description()), View::Status),
        BrowseAction::SaveLink => (Some(session.save_link()), View::Status),
        BrowseAction::OpenLink => (Some(session.open_link()), View::Status),
        BrowseAction::Export(kind, dir) => {
            let dir = match dir {
                Some(dir) => export_dir.join(dir),
                None => export_dir.to_path_buf(),
            };
            (Some(session.export(kind, &dir, &Local::now())), View::Status)
        }
        BrowseAction::Quit => (None, View::Status),
    }
}

/// Human wording of an action outcome
pub fn status_text(status: &ActionStatus) -> String {
    match status {
        ActionStatus::Saved => "Сохранено".to_string(),
        ActionStatus::Generated => "Готово".to_string(),
        ActionStatus::Empty => "Пустой ответ".to_string(),
        ActionStatus::Busy => "Запрос уже выполняется".to_string(),
        ActionStatus::Unavailable => "ИИ-описание не настроено".to_string(),
        ActionStatus::NoSelection => "Участок не выбран".to_string(),
        ActionStatus::Stale => "Ответ устарел".to_string(),
        ActionStatus::Exported(path) => format!("Файл сохранён: {}", path.display()),
        ActionStatus::Opened(url) => format!("Открыть: {}", url),
        ActionStatus::Failed(reason) => format!("Ошибка: {}", reason),
    }
}

fn print_outcome(
    format: OutputFormat,
    session: &Session,
    action: &BrowseAction,
    status: Option<&ActionStatus>,
    view: View,
) -> Result<()> {
    if let Some(status) = status {
        if !status.is_success() {
            warn!(action = action.name(), status = ?status, "browse action did not succeed");
        }
    }

    match format {
        OutputFormat::Json => {
            let selected = session.selected_record().map(|r| r.primary_cadastral());
            let mut output = json!({
                "action": action.name(),
                "status": status,
                "total": session.state().total(),
                "visible": session.state().visible_count(),
                "has_more": session.state().has_more(),
                "selected": selected,
                "ai_available": session.ai_available(),
            });
            if let Some(obj) = output.as_object_mut() {
                match view {
                    View::Detail => {
                        obj.insert("detail".to_string(), json!(session.detail()));
                    }
                    View::Draft => {
                        obj.insert("draft".to_string(), json!(session.draft()));
                    }
                    View::Window | View::Status => {}
                }
            }
            println!("{}", serde_json::to_string(&output)?);
        }
        OutputFormat::Records => {
            print_records_data("action", action.name());
            if let Some(status) = status {
                print_records_data("status", &status_text(status));
            }
            print_view(format, session, view)?;
        }
        OutputFormat::Human => {
            if let Some(status) = status {
                println!("[{}] {}", action.name(), status_text(status));
            }
            print_view(format, session, view)?;
        }
    }
    Ok(())
}

fn print_view(format: OutputFormat, session: &Session, view: View) -> Result<()> {
    match view {
        View::Window => print_window(format, false, session),
        View::Detail => match session.detail() {
            Some(detail) => print_detail(format, &detail),
            None => {
                if format == OutputFormat::Human {
                    println!("{}", status_text(&ActionStatus::NoSelection));
                }
                Ok(())
            }
        },
        View::Draft => {
            if format == OutputFormat::Records {
                wrap_records_body("draft", session.draft());
            } else {
                println!("{}", session.draft());
            }
            Ok(())
        }
        View::Status => Ok(()),
    }
}

fn report_error(format: OutputFormat, error: &CatalogError) {
    match format {
        OutputFormat::Json => println!("{}", error.to_json()),
        OutputFormat::Records => println!("D error \"{}\"", escape_quotes(&error.to_string())),
        OutputFormat::Human => eprintln!("error: {}", error),
    }
}
