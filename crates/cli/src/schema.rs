use logscope_core::ExposureConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(ExposureConfig);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
