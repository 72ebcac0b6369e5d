use gridfill::{GridError, Traversal};

fn main() -> Result<(), GridError> {
    gridfill::init_tracing("grid_subscript");
    gridfill::run_reference(Traversal::Subscript)?;
    Ok(())
}
