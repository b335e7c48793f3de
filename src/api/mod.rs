pub mod room_dto;
