use clap::Parser;
use oc2oscal::ssp_generation::services::PlanIdPolicy;

/// Convert an OpenControl workspace into OSCAL System Security Plans
#[derive(Parser, Debug)]
#[command(name = "oc2oscal")]
#[command(version)]
#[command(
    about = "Convert an OpenControl workspace into one OSCAL SSP XML document per component",
    long_about = None
)]
pub struct Args {
    /// OpenControl workspace directory or file:// URI (defaults to current directory)
    #[arg(short, long, value_name = "LOCATION")]
    pub repository: Option<String>,

    /// Output directory for the generated <component-key>.xml files (default: oscal)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<String>,

    /// How plan ids are chosen: placeholder or random
    #[arg(long, value_name = "POLICY")]
    pub plan_id: Option<PlanIdPolicy>,

    /// Path to a config file (defaults to oc2oscal.config.yml in the workspace)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
