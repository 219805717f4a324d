//! Activity model <-> entity mappers
//!
//! Enum tokens are parsed back from text columns. A token the domain no
//! longer recognizes is a data problem, not a caller problem, so parse
//! failures surface as internal errors rather than validation errors.

use mediatrack_core::{
    ActivityRecord, ActivityType, DimensionRow, DomainError, EntityKind, TypeCount, UserDisplay,
};

use crate::models::{ActivityModel, DimensionRowModel, TypeCountModel, UserDisplayModel};

impl TryFrom<ActivityModel> for ActivityRecord {
    type Error = DomainError;

    fn try_from(model: ActivityModel) -> Result<Self, Self::Error> {
        let activity_type: ActivityType = model
            .activity_type
            .parse()
            .map_err(|e| corrupt_row(model.id, &e))?;
        let entity: EntityKind = model
            .entity
            .parse()
            .map_err(|e| corrupt_row(model.id, &e))?;

        Ok(ActivityRecord {
            id: model.id,
            activity_type,
            entity,
            entity_id: model.entity_id,
            entity_name: model.entity_name,
            user_id: model.user_id,
            details: model.details,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<TypeCountModel> for TypeCount {
    type Error = DomainError;

    fn try_from(model: TypeCountModel) -> Result<Self, Self::Error> {
        let activity_type: ActivityType = model.activity_type.parse().map_err(|e| {
            DomainError::InternalError(format!("unrecognized activity type in aggregate: {e}"))
        })?;
        Ok(TypeCount {
            activity_type,
            count: model.count,
        })
    }
}

impl From<DimensionRowModel> for DimensionRow {
    fn from(model: DimensionRowModel) -> Self {
        DimensionRow {
            contact_id: model.contact_id,
            label: model.label,
            color: model.color,
        }
    }
}

impl From<UserDisplayModel> for UserDisplay {
    fn from(model: UserDisplayModel) -> Self {
        UserDisplay {
            id: model.id,
            name: model.name,
            email: model.email,
        }
    }
}

fn corrupt_row(id: uuid::Uuid, err: &DomainError) -> DomainError {
    DomainError::InternalError(format!("corrupt activity row {id}: {err}"))
}
