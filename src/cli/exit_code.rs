use super::commands::CommandResult;

pub fn exit_code_from_result(result: &CommandResult) -> i32 {
    if result.issues.is_empty() { 0 } else { 1 }
}
