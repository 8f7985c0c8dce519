mod province_dto;

pub use province_dto::{
    CountryProvinceResponseDto, CountryRefDto, NameQuery, ProvinceResponseDto, SaveProvinceDto,
};
