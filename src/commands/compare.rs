//! `plagiscan compare` command - similarity of two text files

use std::path::Path;

use plagiscan_core::error::{PlagiscanError, Result};
use plagiscan_core::format::records_value;
use plagiscan_core::similarity::{round_score, similarity_of_sets};
use plagiscan_core::text::TokenSet;
use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use crate::commands::helpers::read_text;

/// Execute the compare command
pub fn execute(cli: &Cli, file_a: &Path, file_b: &Path) -> Result<()> {
    let tokens_a = TokenSet::from_text(&read_text(file_a)?);
    let tokens_b = TokenSet::from_text(&read_text(file_b)?);

    let precise = similarity_of_sets(&tokens_a, &tokens_b);
    let score = round_score(precise);
    let shared = tokens_a.shared_with(&tokens_b);
    let union = tokens_a.union_len(&tokens_b);

    output_by_format_result!(cli.format,
        json => {
            print_json(&json!({
                "file_a": file_a.display().to_string(),
                "file_b": file_b.display().to_string(),
                "score": score,
                "similarity": precise,
                "shared_words": shared,
                "total_words": union,
            }))?;
            Ok::<(), PlagiscanError>(())
        },
        human => {
            if cli.quiet {
                println!("{}", score);
            } else {
                println!(
                    "{}% similar ({} of {} distinct words shared)",
                    score, shared, union
                );
            }
        },
        records => {
            print_records_header("compare", &[]);
            println!(
                "S a={} b={} score={} similarity={:.2} shared={} total={}",
                records_value(&file_a.display().to_string()),
                records_value(&file_b.display().to_string()),
                score,
                precise,
                shared,
                union
            );
        }
    )
}
