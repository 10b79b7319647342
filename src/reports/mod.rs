use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tirepressure::calculator::{format_psi, PressurePair};
use tirepressure::config::FormState;
use tirepressure::multipliers::{
    Multiplier, RideStyle, RimType, Surface, TireCasing, WheelDiameter,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_inputs(form: &FormState) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let diameter = match WheelDiameter::from_factor(form.wheel_diameter) {
        Some(d) => format!("{} mm ({})", form.wheel_diameter, d),
        None => format!("{} mm", form.wheel_diameter),
    };

    let rows = vec![
        (
            "System Weight",
            format!("{} {}", form.system_weight, form.weight_unit),
        ),
        ("Tire Width", format!("{} mm", form.tire_width)),
        ("Inner Rim Width", format!("{} mm", form.inner_rim_width)),
        ("Wheel Diameter", diameter),
        (
            "Rim Correction",
            if form.adjust_tire_width { "on" } else { "off" }.to_string(),
        ),
        ("Ride Style", RideStyle::label(form.ride_style)),
        ("Tire Casing", TireCasing::label(form.tire_casing)),
        ("Rim Type", RimType::label(form.rim_type)),
        ("Surface", Surface::label(form.surface)),
    ];

    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    println!("\n{}", table);
}

pub fn print_pressures(pressures: &PressurePair) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Front").add_attribute(Attribute::Bold),
        Cell::new("Rear").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(format_psi(pressures.front)).fg(Color::Cyan),
        Cell::new(format_psi(pressures.rear)).fg(Color::Cyan),
    ]);

    for i in 0..=1 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);
}

pub fn print_options(name: &str, options: &[(String, f64)]) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    for (label, value) in options {
        table.add_row(vec![Cell::new(label), Cell::new(format!("{}", value))]);
    }
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}
