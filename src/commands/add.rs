use crate::commands::{CmdMessage, CmdResult};
use crate::date::Date;
use crate::error::Result;
use crate::list::InternshipList;
use crate::model::Internship;

pub fn run(
    internships: &mut InternshipList,
    company: String,
    role: String,
    deadline: Date,
    pay: u32,
) -> Result<CmdResult> {
    let message = format!("Added internship: {company} - {role} (deadline {deadline})");
    internships.add(Internship::new(company, role, deadline, pay));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    Ok(result)
}
