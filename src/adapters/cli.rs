use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::models::{BalanceResult, WaterSample};

#[derive(Parser, Debug)]
#[command(author, version, about = "Water ion balance calculator — solves one unknown from electroneutrality or conductivity", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with the water sample; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for the water sample (overrides --input)"
    )]
    sample_json: Option<String>,
}

/// Read the sample from whichever source the arguments name. Fields absent
/// from the JSON document are treated as unknown, never as zero.
pub fn parse_sample(args: &Args) -> Result<WaterSample, AppError> {
    match (&args.sample_json, &args.input) {
        (Some(doc), _) => {
            serde_json::from_str(doc).map_err(|source| AppError::ParseSampleJson { source })
        }
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            serde_json::from_str(&s).map_err(|source| AppError::ParseInputDoc { source })
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&s).map_err(|source| AppError::ParseInputDoc { source })
        }
        (None, None) => Err(AppError::MissingSampleData),
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct CliOutput<'a> {
    result: &'a BalanceResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_sample: Option<WaterSample>,
}

pub fn print_output(
    sample: &WaterSample,
    result: &BalanceResult,
    args: &Args,
) -> Result<(), AppError> {
    if args.json {
        let out = CliOutput {
            result,
            completed_sample: result
                .is_complete()
                .then(|| sample.completed_with(result)),
        };
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    println!("Status: {}", result.status);
    if let Some(message) = &result.error_message {
        println!("Error: {}", message);
        return Ok(());
    }
    if let (Some(field), Some(value)) = (result.solved_property, result.solved_value) {
        println!("{}: {:.2} {}", field, value, display_unit(field));
    }
    if let (Some(field), Some(value)) = (result.second_solved_property, result.second_solved_value)
    {
        println!("{}: {:.2} {}", field, value, display_unit(field));
    }
    if let Some(cations) = result.cations_sum {
        println!("Cations sum: {:.3} meq/L", cations);
    }
    if let Some(anions) = result.anions_sum {
        println!("Anions sum: {:.3} meq/L", anions);
    }

    Ok(())
}

fn display_unit(field: crate::chemistry::Field) -> &'static str {
    use crate::chemistry::Field;
    match field {
        Field::Conductivity => "µS/cm",
        Field::TotalAlkalinity => "mg/L as CaCO3",
        _ => "mg/L",
    }
}
