use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::InternshipList;

pub fn run(internships: &mut InternshipList, name: String) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Username set to: {name}")));
    internships.set_username(name);
    Ok(result)
}
