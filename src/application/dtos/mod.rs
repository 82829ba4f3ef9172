pub mod trash_dto;
