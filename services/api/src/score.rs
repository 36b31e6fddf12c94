use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{
    score_receipt, ReceiptServiceError, ReceiptSubmission, ReceiptValidator, ScoreCard,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Receipt JSON document to score (reads stdin when omitted)
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Print the score card as JSON instead of a text breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let document = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let card = score_document(&document)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        print!("{}", render_score_card(&card));
    }

    Ok(())
}

pub(crate) fn score_document(document: &str) -> Result<ScoreCard, AppError> {
    let submission: ReceiptSubmission = serde_json::from_str(document)?;
    let receipt = ReceiptValidator::new()
        .validate(submission)
        .map_err(ReceiptServiceError::from)?;
    Ok(score_receipt(&receipt))
}

fn render_score_card(card: &ScoreCard) -> String {
    let mut out = String::from("Receipt points\n");
    for component in &card.components {
        out.push_str(&format!(
            "- {}: {} ({})\n",
            component.rule.label(),
            component.points,
            component.notes
        ));
    }
    out.push_str(&format!("Total: {} points\n", card.total));
    out
}
