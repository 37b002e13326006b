use crate::util::{parse_tech, read_avatar};
use anyhow::Result;
use clap::Args;
use enroll_core::RawSubmission;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod submit;

/// The form fields. `--tech` repeats and keeps its order.
#[derive(Debug, Args)]
pub struct SubmissionArgs {
    #[arg(long)]
    pub avatar: Option<PathBuf>,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, value_name = "TITLE:KNOWLEDGE")]
    pub tech: Vec<String>,
}

impl SubmissionArgs {
    pub fn into_raw(self) -> Result<RawSubmission> {
        let avatar = match &self.avatar {
            Some(path) => Some(read_avatar(path)?),
            None => None,
        };
        let techs = self
            .tech
            .iter()
            .map(|value| parse_tech(value))
            .collect::<Result<Vec<_>>>()?;
        Ok(RawSubmission {
            avatar,
            name: self.name,
            email: self.email,
            password: self.password,
            techs,
        })
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
