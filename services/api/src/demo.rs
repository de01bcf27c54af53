use crate::infra::{provisioned_program_store, seeded_scoring_store};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use govdesk::error::AppError;
use govdesk::governance::program::{
    ItemPatch, ItemStatus, NewAction, NewDecision, Priority, ProgramService,
};
use govdesk::governance::scoring::{ScoringConfig, ScoringService};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for freshness and ageing (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

/// Exercise both engines over the seeded demo tenant and print the views an
/// operator would see on the dashboard.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let now: DateTime<Utc> = match args.as_of {
        Some(date) => date
            .and_hms_opt(12, 0, 0)
            .map(|naive| naive.and_utc())
            .unwrap_or_else(Utc::now),
        None => Utc::now(),
    };

    let scoring = ScoringService::new(seeded_scoring_store(), ScoringConfig::default());
    let program = ProgramService::new(provisioned_program_store());

    println!("Governance portal demo (as of {})", now.date_naive());

    let quality = scoring.quality_summary(now)?;
    println!("\nCorpus quality");
    println!(
        "- IQI {:.2} | {} documents, {} validated, {} fresh",
        quality.iqi_global,
        quality.evidences.total_documents,
        quality.evidences.validated_count,
        quality.evidences.fresh_documents
    );

    let maturity = scoring.maturity()?;
    println!("\nCompliance maturity");
    println!(
        "- score {:.2} ({:?}) | referentials: {}",
        maturity.score,
        maturity.band,
        maturity.iso_referentials.join(", ")
    );

    // Drive workshop 1 far enough that the program KPIs have signal.
    program.start_workshop(1)?;
    for status in [ItemStatus::InProgress, ItemStatus::Done] {
        program.patch_item(
            "A1-01",
            ItemPatch {
                status: Some(status),
                ..ItemPatch::default()
            },
        )?;
    }
    program.validate_item("A1-01", "sponsor", now)?;
    program.create_action(
        NewAction {
            title: "Compléter le RACI v0".to_string(),
            description: "Identifié pendant l'atelier de cadrage".to_string(),
            priority: Priority::High,
            workshop_number: Some(1),
            owner_user_id: Some("user-001".to_string()),
            due_date: None,
        },
        now,
    )?;
    program.create_decision(
        NewDecision {
            decision_text: "Adopter la stratégie à trois environnements".to_string(),
            workshop_number: Some(1),
            decided_by: "sponsor".to_string(),
            evidence_links: Vec::new(),
        },
        now,
    )?;

    let kpis = program.program_kpis(now)?;
    println!("\nProgram rollup");
    println!(
        "- workshops completed {}/{} ({:.1}%)",
        kpis.workshops_completed, 10, kpis.workshop_completion_pct
    );
    println!(
        "- items {} total | {} done | {} validated",
        kpis.items_total, kpis.items_done, kpis.items_validated
    );
    println!(
        "- {} open action(s), average ageing {:.1} day(s) | {} decision(s)",
        kpis.actions_open_count, kpis.actions_avg_ageing_days, kpis.decisions_count
    );

    let ageing = program.max_open_ageing(now)?;
    let summary = scoring.ai_summary(ageing)?;
    println!("\nAI usage governance");
    println!(
        "- {:.1}% authorized | {:.1}% assisted | {:.1}% forbidden over {} usage(s)",
        summary.authorized_percentage,
        summary.assisted_percentage,
        summary.forbidden_percentage,
        summary.total_usages
    );
    println!(
        "- traceability: {} logged, {} audited, {} anomaly(ies)",
        summary.traceability.logged, summary.traceability.audited, summary.traceability.anomalies
    );
    for advisory in &summary.critical_actions {
        println!("- advisory [{:?}] {}", advisory.priority, advisory.title);
    }

    Ok(())
}
