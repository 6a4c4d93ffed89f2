use truthtab::parser::parse;
use truthtab::table::TruthTable;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let expr = parse("NOT (A AND B) IFF (NOT A OR NOT B)")?;
    println!("expr = {}", expr);
    println!("variables = {:?}", expr.variables());
    println!("depth = {}, size = {}", expr.depth(), expr.size());

    let table = TruthTable::new(&expr)?;
    println!("{}", table);

    let report = table.analyze();
    println!("{}", report);

    Ok(())
}
