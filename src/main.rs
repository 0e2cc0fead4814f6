use panelbench::app::App;
use panelbench::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::new()?;
    app.init()?;

    let outcome = app.run().await;
    app.restore()?;

    if let Some(summary) = outcome? {
        match summary.sample {
            Some(sample) => println!(
                "mount-to-first-layout: {} ms ({} moves issued)",
                sample.elapsed_ms(),
                summary.moves_issued
            ),
            None => println!(
                "run finished without a layout sample (state: {:?})",
                summary.final_state
            ),
        }
    }
    Ok(())
}
