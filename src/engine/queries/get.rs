//! Single draft lookup

use crate::draft::{parse_record, Draft};
use crate::error::{DraftsError, Result};
use crate::script::{build, Interpreter, Request};

pub fn get_draft(interpreter: &dyn Interpreter, uuid: &str) -> Result<Draft> {
    let output = interpreter.run(&build(Request::Get {
        uuid: uuid.to_string(),
    }))?;

    if output.is_empty() {
        return Err(DraftsError::NotFound(uuid.to_string()));
    }

    parse_record(&output)
}
