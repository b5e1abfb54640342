use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::{
    features::extract::extract,
    foundation::error::{SigilError, SigilResult},
    synth::{paradigm::Paradigm, synthesize},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Result of one successful generation.
///
/// Never mutated after creation; hand it to the store (see
/// [`crate::SigilRecord::from_generated`]) to track charges and resonance.
pub struct GeneratedSigil {
    /// Statement exactly as supplied.
    pub statement: String,
    /// Grammar used.
    pub paradigm: Paradigm,
    /// Serialized move/line path data.
    pub path_data: String,
    /// Caller-supplied creation time.
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Options for [`forge_batch`].
pub struct BatchOpts {
    /// Worker thread override. `None` uses rayon's default.
    #[serde(default)]
    pub threads: Option<usize>,
}

/// Reject statements that are empty or whitespace only.
pub fn validate_statement(statement: &str) -> SigilResult<&str> {
    if statement.trim().is_empty() {
        return Err(SigilError::validation("no statement supplied"));
    }
    Ok(statement)
}

/// Validate, extract, synthesize, and wrap a single statement.
///
/// `created_at` is passed in so the whole call stays a pure function of its arguments.
#[tracing::instrument(skip(statement), fields(statement_len = statement.len()))]
pub fn forge(
    statement: &str,
    paradigm: Paradigm,
    created_at: DateTime<Utc>,
) -> SigilResult<GeneratedSigil> {
    let statement = validate_statement(statement)?;
    let features = extract(statement);
    let path = synthesize(&features, paradigm);
    tracing::debug!(
        line_count = features.line_count,
        primitives = path.len(),
        "forged sigil"
    );
    Ok(GeneratedSigil {
        statement: statement.to_owned(),
        paradigm,
        path_data: path.to_path_data(),
        created_at,
    })
}

/// Forge many statements in parallel. Output order matches input order and each entry fails
/// or succeeds on its own.
#[tracing::instrument(skip(statements, opts), fields(count = statements.len()))]
pub fn forge_batch<S>(
    statements: &[S],
    paradigm: Paradigm,
    created_at: DateTime<Utc>,
    opts: &BatchOpts,
) -> SigilResult<Vec<SigilResult<GeneratedSigil>>>
where
    S: AsRef<str> + Sync,
{
    let pool = build_thread_pool(opts.threads)?;
    Ok(pool.install(|| {
        statements
            .par_iter()
            .map(|s| forge(s.as_ref(), paradigm, created_at))
            .collect::<Vec<_>>()
    }))
}

fn build_thread_pool(threads: Option<usize>) -> SigilResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SigilError::validation(
            "batch threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SigilError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/forge.rs"]
mod tests;
