use crate::reports;
use clap::Args;
use tirepressure::multipliers::option_tables;

#[derive(Args, Debug, Clone)]
pub struct OptionsArgs {
    /// Only list this table (e.g. ride_style)
    #[arg(short, long)]
    pub table: Option<String>,
}

pub fn run(args: OptionsArgs) {
    let tables = option_tables();
    let mut shown = 0;

    for (name, options) in &tables {
        if let Some(ref filter) = args.table {
            if !name.eq_ignore_ascii_case(filter.trim()) {
                continue;
            }
        }
        reports::print_options(name, options);
        shown += 1;
    }

    if shown == 0 {
        println!("No option tables found matching criteria.");
    }
}
