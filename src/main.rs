use anyhow::{Context, Result};
use csvframe::{
    clean::{drop_missing, fill_missing, DropConfig},
    frame::{capitalize, Value},
    load::{read_csv, read_csv_with_map, ColumnMap, Header},
    render,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) default load + inspect ───────────────────────────────────
    let df = read_csv("data.csv", Header::FirstRow).context("loading data.csv")?;
    info!(
        rows = df.num_rows(),
        columns = df.num_columns(),
        "loaded data.csv"
    );
    println!("{}", render::head(&df, 5));
    println!("{}", render::tail(&df, 5));

    // ─── 3) clean missing values ─────────────────────────────────────
    let dropped = drop_missing(&df, &DropConfig::default())?;
    info!(
        before = df.num_rows(),
        after = dropped.num_rows(),
        "drop-missing pass"
    );
    let filled = fill_missing(&df, &Value::Text(String::new()));
    info!(rows = filled.num_rows(), "fill-missing pass");

    // ─── 4) headerless load ──────────────────────────────────────────
    let raw = read_csv("data.csv", Header::None).context("loading data.csv without headers")?;
    println!("{}", render::head(&raw, 5));

    // ─── 5) mapped load ──────────────────────────────────────────────
    let map = ColumnMap::from_path("demo_map.json").context("loading demo_map.json")?;
    println!("{}\n", map);
    let mapped = read_csv_with_map("data_no_headers.csv", &map)
        .context("loading data_no_headers.csv with column map")?;
    println!("{}", render::head(&mapped, 5));

    // ─── 6) capitalize the first mapped column ───────────────────────
    let capitalized = mapped
        .apply("names", capitalize)
        .context("capitalizing 'names' column")?;
    println!("{}", render::head(&capitalized, 5));

    info!("done");
    Ok(())
}
