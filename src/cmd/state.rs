use tirepressure::store::StateStore;
use tirepressure::TireResult;

pub fn show(store: &StateStore) -> TireResult<()> {
    let form = store.load();
    println!("{}", serde_json::to_string_pretty(&form)?);
    Ok(())
}

pub fn reset(store: &StateStore) -> TireResult<()> {
    store.clear()?;
    println!("Saved state cleared: {}", store.path().display());
    Ok(())
}
