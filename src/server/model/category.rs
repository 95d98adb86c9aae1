use chrono::{DateTime, Utc};

use crate::model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

/// Categories seeded by the initialize operation, with their descriptions.
pub const DEFAULT_CATEGORIES: [(&str, &str); 7] = [
    (
        "IA, Informática y Tecnología",
        "Inteligencia artificial, programación, tecnología digital",
    ),
    (
        "Física y Matemáticas",
        "Ciencias exactas, física teórica y aplicada, matemáticas",
    ),
    ("Filosofía", "Filosofía, ética, pensamiento crítico"),
    (
        "Biología",
        "Ciencias de la vida, biología molecular, ecología",
    ),
    (
        "Ciencias de la Salud",
        "Medicina, salud pública, investigación médica",
    ),
    (
        "Cosmología",
        "Astronomía, cosmología, ciencias del espacio",
    ),
    (
        "Lengua y Literatura",
        "Literatura, lingüística, análisis textual",
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            is_active: dto.is_active,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateCategoryParams {
    pub fn from_dto(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
            is_active: dto.is_active,
        }
    }
}
