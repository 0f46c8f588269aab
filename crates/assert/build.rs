use http_assert_table::compile::BuildCtx;
use http_assert_table::emit::render_bindings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let ctx = BuildCtx::from_env()?;
	ctx.rerun_if_changed(&ctx.asset("build.rs"));

	let table = ctx.load_table()?;
	ctx.write_source("bindings.rs", &render_bindings(&table))?;

	Ok(())
}
