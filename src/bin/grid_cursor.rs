use gridfill::{GridError, Traversal};

fn main() -> Result<(), GridError> {
    gridfill::init_tracing("grid_cursor");
    gridfill::run_reference(Traversal::Cursor)?;
    Ok(())
}
