use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::animals::model::{
    Animal, AnimalFilterParams, CreateAnimalDto, PaginatedAnimalsResponse, UpdateAnimalDto,
};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto, User, UserRole,
};
use crate::modules::breeding::model::{
    BreedingFilterParams, BreedingRecord, CreateBreedingRecordDto, PaginatedBreedingResponse,
    UpdateBreedingRecordDto,
};
use crate::modules::feed_types::model::{CreateFeedTypeDto, FeedType, UpdateFeedTypeDto};
use crate::modules::inventory::model::{
    CreateInventoryCategoryDto, CreateInventoryItemDto, InventoryCategory, InventoryFilterParams,
    InventoryItem, UpdateInventoryCategoryDto, UpdateInventoryItemDto,
};
use crate::modules::locations::model::{CreateLocationDto, Location, UpdateLocationDto};
use crate::modules::medications::model::{CreateMedicationDto, Medication, UpdateMedicationDto};
use crate::modules::services::model::{CreateServiceDto, FarmService, UpdateServiceDto};
use crate::modules::vaccinations::model::{
    CreateVaccinationRecordDto, PaginatedVaccinationsResponse, UpdateVaccinationRecordDto,
    VaccinationFilterParams, VaccinationRecord,
};
use crate::modules::weights::model::{
    CreateWeightRecordDto, PaginatedWeightsResponse, UpdateWeightRecordDto, WeightFilterParams,
    WeightRecord,
};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::animals::controller::create_animal,
        crate::modules::animals::controller::get_animals,
        crate::modules::animals::controller::get_animal_by_id,
        crate::modules::animals::controller::update_animal,
        crate::modules::animals::controller::delete_animal,
        crate::modules::weights::controller::create_weight_record,
        crate::modules::weights::controller::get_weight_records,
        crate::modules::weights::controller::get_weight_record_by_id,
        crate::modules::weights::controller::update_weight_record,
        crate::modules::weights::controller::delete_weight_record,
        crate::modules::breeding::controller::create_breeding_record,
        crate::modules::breeding::controller::get_breeding_records,
        crate::modules::breeding::controller::get_breeding_record_by_id,
        crate::modules::breeding::controller::update_breeding_record,
        crate::modules::breeding::controller::delete_breeding_record,
        crate::modules::feed_types::controller::create_feed_type,
        crate::modules::feed_types::controller::get_feed_types,
        crate::modules::feed_types::controller::get_feed_type_by_id,
        crate::modules::feed_types::controller::update_feed_type,
        crate::modules::feed_types::controller::delete_feed_type,
        crate::modules::vaccinations::controller::create_vaccination_record,
        crate::modules::vaccinations::controller::get_vaccination_records,
        crate::modules::vaccinations::controller::get_vaccination_record_by_id,
        crate::modules::vaccinations::controller::update_vaccination_record,
        crate::modules::vaccinations::controller::delete_vaccination_record,
        crate::modules::medications::controller::create_medication,
        crate::modules::medications::controller::get_medications,
        crate::modules::medications::controller::get_medication_by_id,
        crate::modules::medications::controller::update_medication,
        crate::modules::medications::controller::delete_medication,
        crate::modules::services::controller::create_service,
        crate::modules::services::controller::get_services,
        crate::modules::services::controller::get_service_by_id,
        crate::modules::services::controller::update_service,
        crate::modules::services::controller::delete_service,
        crate::modules::locations::controller::create_location,
        crate::modules::locations::controller::get_locations,
        crate::modules::locations::controller::get_location_by_id,
        crate::modules::locations::controller::update_location,
        crate::modules::locations::controller::delete_location,
        crate::modules::inventory::controller::create_category,
        crate::modules::inventory::controller::get_categories,
        crate::modules::inventory::controller::get_category_by_id,
        crate::modules::inventory::controller::update_category,
        crate::modules::inventory::controller::delete_category,
        crate::modules::inventory::controller::create_item,
        crate::modules::inventory::controller::get_items,
        crate::modules::inventory::controller::get_item_by_id,
        crate::modules::inventory::controller::update_item,
        crate::modules::inventory::controller::delete_item,
    ),
    components(
        schemas(
            User,
            UserRole,
            RegisterRequestDto,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            Animal,
            CreateAnimalDto,
            UpdateAnimalDto,
            AnimalFilterParams,
            PaginatedAnimalsResponse,
            WeightRecord,
            CreateWeightRecordDto,
            UpdateWeightRecordDto,
            WeightFilterParams,
            PaginatedWeightsResponse,
            BreedingRecord,
            CreateBreedingRecordDto,
            UpdateBreedingRecordDto,
            BreedingFilterParams,
            PaginatedBreedingResponse,
            FeedType,
            CreateFeedTypeDto,
            UpdateFeedTypeDto,
            VaccinationRecord,
            CreateVaccinationRecordDto,
            UpdateVaccinationRecordDto,
            VaccinationFilterParams,
            PaginatedVaccinationsResponse,
            Medication,
            CreateMedicationDto,
            UpdateMedicationDto,
            FarmService,
            CreateServiceDto,
            UpdateServiceDto,
            Location,
            CreateLocationDto,
            UpdateLocationDto,
            InventoryCategory,
            CreateInventoryCategoryDto,
            UpdateInventoryCategoryDto,
            InventoryItem,
            CreateInventoryItemDto,
            UpdateInventoryItemDto,
            InventoryFilterParams,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Animals", description = "Herd registry endpoints"),
        (name = "Weights", description = "Weight record endpoints"),
        (name = "Breeding", description = "Breeding record endpoints"),
        (name = "Feed Types", description = "Feed type catalog endpoints"),
        (name = "Vaccinations", description = "Vaccination record endpoints"),
        (name = "Medications", description = "Medication catalog endpoints"),
        (name = "Services", description = "Farm service catalog endpoints"),
        (name = "Locations", description = "Paddock and pen management endpoints"),
        (name = "Inventory", description = "Stock and category management endpoints")
    ),
    info(
        title = "Herdbook API",
        version = "0.1.0",
        description = "A livestock management REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication and role-based access control.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
