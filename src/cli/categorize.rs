use grocer_shopping::CategorizationService;

pub fn categorize(names: &[String]) -> anyhow::Result<()> {
    for name in names {
        println!("{name}\t{}", CategorizationService::categorize(name));
    }

    Ok(())
}
