use crate::domain::InventoryError;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;

/// Extracts a resource id from the path.
///
/// Anything that is not a positive integer cannot name a row, so it is reported
/// as the entity's `NotFound` rather than as a malformed request.
pub fn resource_id(
    label: &'static str,
    path: Result<Path<i64>, PathRejection>,
) -> Result<i64, InventoryError> {
    match path {
        Ok(Path(id)) if id > 0 => Ok(id),
        _ => Err(InventoryError::NotFound(label)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_ids_are_not_found() {
        assert_eq!(resource_id("Insumo", Ok(Path(3))).unwrap(), 3);
        for id in [0, -4] {
            let err = resource_id("Insumo", Ok(Path(id))).unwrap_err();
            assert_eq!(err.to_string(), "Insumo not found");
        }
    }
}
