use crate::commands::{print_json, SubmissionArgs};
use crate::error::invalid_input;
use anyhow::Result;
use enroll_core::{validate, FieldErrorSet, NormalizedSubmission};

pub fn run(json: bool, args: SubmissionArgs) -> Result<()> {
    let raw = args.into_raw()?;
    match validate(raw) {
        Ok(submission) => print_submission(json, &submission),
        Err(errors) => {
            print_field_errors(json, &errors)?;
            Err(invalid_input(format!(
                "submission failed validation ({})",
                errors
            )))
        }
    }
}

pub fn print_submission(json: bool, submission: &NormalizedSubmission) -> Result<()> {
    if json {
        return print_json(submission);
    }
    println!("Name: {}", submission.name);
    println!("E-mail: {}", submission.email);
    println!(
        "Avatar: {} ({} bytes)",
        submission.avatar.file_name, submission.avatar.size_bytes
    );
    println!("Techs:");
    for tech in &submission.techs {
        println!("  - {} ({})", tech.title, tech.knowledge);
    }
    Ok(())
}

pub fn print_field_errors(json: bool, errors: &FieldErrorSet) -> Result<()> {
    if json {
        return print_json(errors);
    }
    for error in errors.iter() {
        eprintln!("{}: {}", error.path, error.message());
    }
    Ok(())
}
