use crate::commands::{CmdMessage, CmdResult};

const HELP_TEXT: &str = "\
Available commands:
  add company/COMPANY role/ROLE deadline/DD-MM-YYYY pay/AMOUNT
      Track a new internship application (tags may appear in any order).
  list [sort/asc|sort/desc]
      Show all internships, optionally sorted by deadline.
  find KEYWORD
      Search company and role names (case-insensitive).
  update INDEX field/VALUE ...
      Change one or more fields: company/, role/, deadline/, pay/, status/.
  delete INDEX
      Remove an internship.
  username NAME
      Set the name shown in greetings and on the dashboard.
  dashboard
      Show totals, the nearest deadline, and a status overview.
  help
      Show this message.
  exit
      Save and quit.";

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(HELP_TEXT));
    result
}
