//! Turns raw REPL input into validated [`Command`] values.
//!
//! The argument grammar is built on tagged fields (`company/VALUE`,
//! `pay/5000`, ...). Values may contain spaces and further `/` characters, so
//! the splitter breaks only on whitespace that immediately precedes a
//! recognized tag. Rust's `regex` crate has no lookahead, so the split is a
//! small hand-rolled scanner; see [`split_tagged`].

use crate::date::Date;
use crate::error::{Result, StintError};
use crate::list::{COMPANY_MAXLEN, ROLE_MAXLEN, SortOrder};
use crate::model::Status;
use tracing::debug;

const ADD_TAGS: [&str; 4] = ["company/", "role/", "deadline/", "pay/"];
const UPDATE_TAGS: [&str; 5] = ["company/", "role/", "deadline/", "pay/", "status/"];

/// A fully parsed and validated user command, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        company: String,
        role: String,
        deadline: Date,
        pay: u32,
    },
    Delete {
        index: usize,
    },
    Update {
        index: usize,
        fields: UpdateFields,
    },
    List {
        order: SortOrder,
    },
    Find {
        keyword: String,
    },
    Username {
        name: String,
    },
    Dashboard,
    Help,
    Exit,
}

impl Command {
    /// Whether executing this command can change the collection (and so
    /// warrants a save). `List` counts because sorting reorders in place.
    pub fn mutates(&self) -> bool {
        match self {
            Command::Add { .. }
            | Command::Delete { .. }
            | Command::Update { .. }
            | Command::Username { .. } => true,
            Command::List { order } => *order != SortOrder::Default,
            _ => false,
        }
    }
}

/// Field updates carried by an `update` command. All fields are parsed and
/// validated before any store mutation, so an update is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateFields {
    pub company: Option<String>,
    pub role: Option<String>,
    pub deadline: Option<Date>,
    pub pay: Option<u32>,
    pub status: Option<Status>,
}

impl UpdateFields {
    fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.role.is_none()
            && self.deadline.is_none()
            && self.pay.is_none()
            && self.status.is_none()
    }
}

/// Parses one input line. The first whitespace-delimited token is the
/// command keyword (case-insensitive); the rest is handed to the keyword's
/// argument grammar.
pub fn parse(line: &str) -> Result<Command> {
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed.trim_end(), ""),
    };
    let keyword = word.to_lowercase();
    debug!(keyword, "parsing command");

    match keyword.as_str() {
        "add" => parse_add(rest),
        "delete" => parse_delete(rest),
        "update" => parse_update(rest),
        "list" => parse_list(rest),
        "find" => parse_find(rest),
        "username" => parse_username(rest),
        "dashboard" => Ok(Command::Dashboard),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        other => Err(StintError::UnknownCommand(other.to_string())),
    }
}

/// Splits `input` on whitespace runs that immediately precede one of `tags`.
///
/// The whitespace run itself is dropped. Whitespace inside a value is kept,
/// which is what lets multi-word companies and roles survive parsing.
fn split_tagged<'a>(input: &'a str, tags: &[&str]) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut segment_start = 0;
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !c.is_whitespace() {
            continue;
        }
        // Consume the whole whitespace run.
        let mut run_end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if next.is_whitespace() {
                chars.next();
                run_end = j + next.len_utf8();
            } else {
                break;
            }
        }
        let rest = &input[run_end..];
        if i > segment_start && tags.iter().any(|t| rest.starts_with(t)) {
            parts.push(&input[segment_start..i]);
            segment_start = run_end;
        }
    }
    parts.push(&input[segment_start..]);
    parts
}

fn parse_add(args: &str) -> Result<Command> {
    let args = args.trim();
    if args.is_empty() {
        return Err(StintError::InvalidAddCommand);
    }

    let mut company: Option<&str> = None;
    let mut role: Option<&str> = None;
    let mut deadline: Option<&str> = None;
    let mut pay: Option<&str> = None;

    for segment in split_tagged(args, &ADD_TAGS) {
        let segment = segment.trim();
        let slot = if let Some(v) = segment.strip_prefix("company/") {
            company.replace(v.trim())
        } else if let Some(v) = segment.strip_prefix("role/") {
            role.replace(v.trim())
        } else if let Some(v) = segment.strip_prefix("deadline/") {
            deadline.replace(v.trim())
        } else if let Some(v) = segment.strip_prefix("pay/") {
            pay.replace(v.trim())
        } else {
            return Err(StintError::InvalidAddCommand);
        };
        // A duplicated tag is as malformed as a missing one.
        if slot.is_some() {
            return Err(StintError::InvalidAddCommand);
        }
    }

    let (Some(company), Some(role), Some(deadline), Some(pay)) = (company, role, deadline, pay)
    else {
        return Err(StintError::InvalidAddCommand);
    };

    if company.is_empty() || role.is_empty() {
        return Err(StintError::InvalidAddCommand);
    }
    if company.chars().count() > COMPANY_MAXLEN || role.chars().count() > ROLE_MAXLEN {
        return Err(StintError::InvalidAddCommand);
    }

    let deadline = Date::parse(deadline).map_err(|_| StintError::InvalidAddCommand)?;
    let pay: i64 = pay.parse().map_err(|_| StintError::InvalidAddCommand)?;
    let pay = u32::try_from(pay).map_err(|_| StintError::InvalidAddCommand)?;

    Ok(Command::Add {
        company: company.to_string(),
        role: role.to_string(),
        deadline,
        pay,
    })
}

fn parse_delete(args: &str) -> Result<Command> {
    let args = args.trim();
    if args.is_empty() {
        return Err(StintError::InvalidDeleteCommand);
    }
    let one_based: i64 = args.parse().map_err(|_| StintError::InvalidIndex)?;
    if one_based < 1 {
        return Err(StintError::InvalidIndex);
    }
    Ok(Command::Delete {
        index: (one_based - 1) as usize,
    })
}

fn parse_update(args: &str) -> Result<Command> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(StintError::InvalidUpdateFormat);
    }

    let (index_token, tagged) = trimmed
        .split_once(char::is_whitespace)
        .ok_or(StintError::InvalidUpdateFormat)?;
    let one_based: i64 = index_token
        .parse()
        .map_err(|_| StintError::InvalidIndexForUpdate)?;
    if one_based < 1 {
        return Err(StintError::InvalidIndexForUpdate);
    }
    let index = (one_based - 1) as usize;

    let tagged = tagged.trim();
    if tagged.is_empty() {
        return Err(StintError::NoUpdateFields);
    }

    let mut fields = UpdateFields::default();
    for segment in split_tagged(tagged, &UPDATE_TAGS) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if let Some(v) = segment.strip_prefix("company/") {
            let v = v.trim();
            if v.is_empty() {
                return Err(StintError::EmptyField("company/".to_string()));
            }
            fields.company = Some(v.to_string());
        } else if let Some(v) = segment.strip_prefix("role/") {
            let v = v.trim();
            if v.is_empty() {
                return Err(StintError::EmptyField("role/".to_string()));
            }
            fields.role = Some(v.to_string());
        } else if let Some(v) = segment.strip_prefix("deadline/") {
            fields.deadline = Some(Date::parse(v)?);
        } else if let Some(v) = segment.strip_prefix("pay/") {
            let pay: i64 = v.trim().parse().map_err(|_| StintError::InvalidPayFormat)?;
            let pay = u32::try_from(pay).map_err(|_| StintError::InvalidPayFormat)?;
            fields.pay = Some(pay);
        } else if let Some(v) = segment.strip_prefix("status/") {
            let v = v.trim();
            if v.is_empty() {
                return Err(StintError::EmptyField("status/".to_string()));
            }
            fields.status = Some(v.parse()?);
        } else {
            return Err(StintError::UnknownUpdateField(segment.to_string()));
        }
    }

    if fields.is_empty() {
        return Err(StintError::NoUpdateFields);
    }

    Ok(Command::Update { index, fields })
}

fn parse_list(args: &str) -> Result<Command> {
    let args = args.trim();
    if args.is_empty() {
        return Ok(Command::List {
            order: SortOrder::Default,
        });
    }
    let Some(order) = args.strip_prefix("sort/") else {
        return Err(StintError::InvalidListCommand);
    };
    match order.trim() {
        "asc" => Ok(Command::List {
            order: SortOrder::Ascending,
        }),
        "desc" => Ok(Command::List {
            order: SortOrder::Descending,
        }),
        _ => Err(StintError::InvalidListCommand),
    }
}

fn parse_find(args: &str) -> Result<Command> {
    let keyword = args.trim();
    if keyword.is_empty() {
        return Err(StintError::InvalidFindCommand);
    }
    Ok(Command::Find {
        keyword: keyword.to_string(),
    })
}

fn parse_username(args: &str) -> Result<Command> {
    if args.trim().is_empty() {
        return Err(StintError::InvalidUsernameCommand);
    }
    // Stored verbatim, not trimmed.
    Ok(Command::Username {
        name: args.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(parse("LIST").unwrap(), parse("list").unwrap());
        assert_eq!(parse("Exit").unwrap(), Command::Exit);
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(matches!(
            parse("frobnicate"),
            Err(StintError::UnknownCommand(w)) if w == "frobnicate"
        ));
    }

    #[test]
    fn split_tagged_breaks_before_tags_only() {
        let parts = split_tagged(
            "company/Jane Street role/Quant Researcher deadline/25-12-2025 pay/10000",
            &ADD_TAGS,
        );
        assert_eq!(
            parts,
            [
                "company/Jane Street",
                "role/Quant Researcher",
                "deadline/25-12-2025",
                "pay/10000"
            ]
        );
    }

    #[test]
    fn split_tagged_keeps_later_slashes_in_values() {
        let parts = split_tagged("company/A/B Ltd role/Dev", &ADD_TAGS);
        assert_eq!(parts, ["company/A/B Ltd", "role/Dev"]);
    }

    #[test]
    fn add_parses_all_fields() {
        let cmd = parse("add company/Google role/SWE deadline/01-01-2026 pay/1000").unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                company: "Google".into(),
                role: "SWE".into(),
                deadline: Date::parse("01-01-2026").unwrap(),
                pay: 1000,
            }
        );
    }

    #[test]
    fn add_is_tag_order_independent() {
        let a = parse("add company/Google role/SWE deadline/01-01-2026 pay/1000").unwrap();
        let b = parse("add role/SWE company/Google pay/1000 deadline/01-01-2026").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn add_preserves_multi_word_values() {
        let cmd =
            parse("add company/Jane Street role/Quant Researcher deadline/25-12-2025 pay/10000")
                .unwrap();
        let Command::Add { company, role, .. } = cmd else {
            panic!("expected add command");
        };
        assert_eq!(company, "Jane Street");
        assert_eq!(role, "Quant Researcher");
    }

    #[test]
    fn add_rejects_missing_tag() {
        assert!(matches!(
            parse("add company/Google role/SWE deadline/01-01-2026"),
            Err(StintError::InvalidAddCommand)
        ));
    }

    #[test]
    fn add_rejects_duplicate_tag() {
        assert!(matches!(
            parse("add company/A company/B role/SWE deadline/01-01-2026 pay/1"),
            Err(StintError::InvalidAddCommand)
        ));
    }

    #[test]
    fn add_rejects_unknown_leading_text() {
        assert!(matches!(
            parse("add hello company/A role/B deadline/01-01-2026 pay/1"),
            Err(StintError::InvalidAddCommand)
        ));
    }

    #[test]
    fn add_rejects_empty_values_and_bad_pay() {
        assert!(parse("add company/ role/SWE deadline/01-01-2026 pay/1").is_err());
        assert!(parse("add company/A role/SWE deadline/01-01-2026 pay/-5").is_err());
        assert!(parse("add company/A role/SWE deadline/01-01-2026 pay/lots").is_err());
    }

    #[test]
    fn add_rejects_over_long_fields() {
        let long_company = "C".repeat(COMPANY_MAXLEN + 1);
        assert!(matches!(
            parse(&format!(
                "add company/{long_company} role/SWE deadline/01-01-2026 pay/1"
            )),
            Err(StintError::InvalidAddCommand)
        ));
        let long_role = "R".repeat(ROLE_MAXLEN + 1);
        assert!(parse(&format!(
            "add company/A role/{long_role} deadline/01-01-2026 pay/1"
        ))
        .is_err());
    }

    #[test]
    fn add_normalizes_date_errors() {
        assert!(matches!(
            parse("add company/A role/B deadline/31-02-2026 pay/1"),
            Err(StintError::InvalidAddCommand)
        ));
    }

    #[test]
    fn delete_translates_to_zero_based() {
        assert_eq!(parse("delete 3").unwrap(), Command::Delete { index: 2 });
    }

    #[test]
    fn delete_rejects_non_numeric_and_non_positive() {
        assert!(matches!(parse("delete abc"), Err(StintError::InvalidIndex)));
        assert!(matches!(parse("delete 0"), Err(StintError::InvalidIndex)));
        assert!(matches!(parse("delete -1"), Err(StintError::InvalidIndex)));
        assert!(matches!(
            parse("delete"),
            Err(StintError::InvalidDeleteCommand)
        ));
    }

    #[test]
    fn update_parses_multiple_fields() {
        let cmd = parse("update 2 company/Jane Street pay/9000 status/accepted").unwrap();
        let Command::Update { index, fields } = cmd else {
            panic!("expected update command");
        };
        assert_eq!(index, 1);
        assert_eq!(fields.company.as_deref(), Some("Jane Street"));
        assert_eq!(fields.pay, Some(9000));
        assert_eq!(fields.status, Some(Status::Accepted));
        assert!(fields.role.is_none());
        assert!(fields.deadline.is_none());
    }

    #[test]
    fn update_requires_index_and_fields() {
        assert!(matches!(
            parse("update"),
            Err(StintError::InvalidUpdateFormat)
        ));
        assert!(matches!(
            parse("update 1"),
            Err(StintError::InvalidUpdateFormat)
        ));
        assert!(matches!(
            parse("update one company/A"),
            Err(StintError::InvalidIndexForUpdate)
        ));
    }

    #[test]
    fn update_rejects_unknown_field() {
        assert!(matches!(
            parse("update 1 salary/9000"),
            Err(StintError::UnknownUpdateField(t)) if t == "salary/9000"
        ));
    }

    #[test]
    fn update_rejects_empty_field_value() {
        assert!(matches!(
            parse("update 1 company/"),
            Err(StintError::EmptyField(t)) if t == "company/"
        ));
    }

    #[test]
    fn update_rejects_bad_pay() {
        assert!(matches!(
            parse("update 1 pay/-100"),
            Err(StintError::InvalidPayFormat)
        ));
        assert!(matches!(
            parse("update 1 pay/lots"),
            Err(StintError::InvalidPayFormat)
        ));
    }

    #[test]
    fn update_propagates_date_errors() {
        assert!(matches!(
            parse("update 1 deadline/31-02-2026"),
            Err(StintError::InvalidDate(_))
        ));
        assert!(matches!(
            parse("update 1 deadline/tomorrow"),
            Err(StintError::InvalidDateFormat)
        ));
    }

    #[test]
    fn update_validates_status_up_front() {
        assert!(matches!(
            parse("update 1 status/ghosted"),
            Err(StintError::InvalidStatus(_))
        ));
    }

    #[test]
    fn list_accepts_sort_suffixes() {
        assert_eq!(
            parse("list").unwrap(),
            Command::List {
                order: SortOrder::Default
            }
        );
        assert_eq!(
            parse("list sort/asc").unwrap(),
            Command::List {
                order: SortOrder::Ascending
            }
        );
        assert_eq!(
            parse("list sort/desc").unwrap(),
            Command::List {
                order: SortOrder::Descending
            }
        );
    }

    #[test]
    fn list_rejects_other_arguments() {
        assert!(matches!(
            parse("list sort/sideways"),
            Err(StintError::InvalidListCommand)
        ));
        assert!(matches!(
            parse("list everything"),
            Err(StintError::InvalidListCommand)
        ));
        assert!(matches!(
            parse("list sort/asc sort/desc"),
            Err(StintError::InvalidListCommand)
        ));
    }

    #[test]
    fn find_requires_keyword() {
        assert_eq!(
            parse("find Jane Street").unwrap(),
            Command::Find {
                keyword: "Jane Street".into()
            }
        );
        assert!(matches!(parse("find"), Err(StintError::InvalidFindCommand)));
    }

    #[test]
    fn username_keeps_argument_verbatim() {
        assert_eq!(
            parse("username  Ada Lovelace ").unwrap(),
            Command::Username {
                name: " Ada Lovelace ".into()
            }
        );
        assert!(matches!(
            parse("username   "),
            Err(StintError::InvalidUsernameCommand)
        ));
    }
}
