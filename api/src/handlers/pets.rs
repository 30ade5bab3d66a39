//! Pet handlers
//!
//! Endpoints for creating and querying pets.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::app::validate_pet_request;
use crate::domain::entities::{Animal, Pet};
use crate::error::AppError;
use crate::AppState;

/// Wire shape of a stored pet; `species` is its numeric code
#[derive(Debug, Serialize)]
pub struct PetResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub species: i32,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            age: pet.age,
            species: pet.species.code(),
        }
    }
}

/// POST /pets
///
/// Validate the request body, build the animal, and store it as a pet.
/// The body is taken as a loose JSON value so field validation can report
/// exactly what was supplied.
pub async fn create_pet(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<PetResponse>), AppError> {
    let fields = validate_pet_request(&body)?;
    let animal = Animal::new(fields.name, fields.age, &fields.species)?;
    let pet = state.pet_service.create_pet(&animal).await?;

    Ok((StatusCode::CREATED, Json(pet.into())))
}

/// GET /pets
///
/// List every stored pet.
pub async fn list_pets(State(state): State<AppState>) -> Json<Vec<PetResponse>> {
    let pets = state.pet_service.get_all_pets().await;

    Json(pets.into_iter().map(PetResponse::from).collect())
}

/// GET /pets/:id
///
/// Fetch one pet by id.
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PetResponse>, AppError> {
    let pet = state
        .pet_service
        .get_pet(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Pet {} not found", id)))?;

    Ok(Json(pet.into()))
}

/// GET /pets/oldest
///
/// Fetch the pet with the greatest age.
pub async fn get_oldest_pet(
    State(state): State<AppState>,
) -> Result<Json<PetResponse>, AppError> {
    let pet = state.pet_service.get_oldest_pet().await?;

    Ok(Json(pet.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Species;

    #[test]
    fn serialize_pet_response() {
        let response = PetResponse {
            id: 1,
            name: "Fido".to_string(),
            age: 5,
            species: 1,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Fido", "age": 5, "species": 1})
        );
    }

    #[test]
    fn response_carries_numeric_species_code() {
        let pet = Pet {
            id: 2,
            name: "Whiskers".to_string(),
            age: 3,
            species: Species::Cat,
        };

        let response = PetResponse::from(pet);
        assert_eq!(response.species, 2);
    }
}
