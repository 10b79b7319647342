use crate::reports;
use clap::{ArgMatches, Args};
use tirepressure::config::FormState;
use tirepressure::store::StateStore;
use tirepressure::TireResult;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub form: FormState,

    /// Do not remember these inputs for the next run
    #[arg(long, default_value_t = false)]
    pub no_save: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CalcArgs, matches: &ArgMatches, store: &StateStore) -> TireResult<()> {
    // Saved inputs are the base; flags typed now override them.
    let mut form = store.load();
    form.merge_from_cli(&args.form, matches);
    debug!("Effective form state: {:?}", form);

    let pressures = form.pressures()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&pressures)?);
    } else {
        reports::print_inputs(&form);
        reports::print_pressures(&pressures);
    }

    if !args.no_save {
        store.save(&form)?;
    }
    Ok(())
}
