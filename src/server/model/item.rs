//! Fields shared by books, discs and games.

use crate::{
    model::item::{ItemDto, ItemFieldsDto},
    server::{
        error::AppError,
        model::validate::{
            optional_text, required, required_text, DIGITAL_REQUIRED, LIST_PRICE_NEGATIVE,
            PHYSICAL_REQUIRED, PUBLISHER_REQUIRED, TITLE_REQUIRED,
        },
    },
};

/// Validated base fields of an item.
///
/// Also used as the domain representation, since the stored shape is identical.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemParams {
    pub title: String,
    pub physical: bool,
    pub digital: bool,
    pub publisher: String,
    pub list_price: Option<f64>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub checked_out: bool,
    pub checked_out_by: Option<String>,
    pub series: Option<String>,
}

impl ItemParams {
    pub fn from_dto(dto: ItemFieldsDto) -> Result<Self, AppError> {
        let title = required_text(dto.title, TITLE_REQUIRED)?;
        let physical = required(dto.physical, PHYSICAL_REQUIRED)?;
        let digital = required(dto.digital, DIGITAL_REQUIRED)?;
        let publisher = required_text(dto.publisher, PUBLISHER_REQUIRED)?;

        if dto.list_price.is_some_and(|price| price < 0.0) {
            return Err(AppError::Validation(LIST_PRICE_NEGATIVE.to_string()));
        }

        let checked_out = dto.checked_out.unwrap_or(false);

        Ok(Self {
            title,
            physical,
            digital,
            publisher,
            list_price: dto.list_price,
            image: optional_text(dto.image),
            location: optional_text(dto.location),
            checked_out,
            // A borrower is only meaningful while the item is out.
            checked_out_by: optional_text(dto.checked_out_by).filter(|_| checked_out),
            series: optional_text(dto.series),
        })
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            title: self.title,
            physical: self.physical,
            digital: self.digital,
            publisher: self.publisher,
            list_price: self.list_price,
            image: self.image,
            location: self.location,
            checked_out: self.checked_out,
            checked_out_by: self.checked_out_by,
            series: self.series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ItemFieldsDto {
        ItemFieldsDto {
            title: Some("Monster".to_string()),
            physical: Some(true),
            digital: Some(false),
            publisher: Some("Viz".to_string()),
            ..Default::default()
        }
    }

    fn message(result: Result<ItemParams, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_minimal_item() {
        let params = ItemParams::from_dto(fields()).unwrap();
        assert_eq!(params.title, "Monster");
        assert!(!params.checked_out);
        assert_eq!(params.series, None);
    }

    #[test]
    fn reports_first_missing_field() {
        let dto = ItemFieldsDto {
            title: None,
            publisher: None,
            ..fields()
        };
        assert_eq!(message(ItemParams::from_dto(dto)), TITLE_REQUIRED);

        let dto = ItemFieldsDto {
            digital: None,
            publisher: None,
            ..fields()
        };
        assert_eq!(message(ItemParams::from_dto(dto)), DIGITAL_REQUIRED);
    }

    #[test]
    fn rejects_negative_price() {
        let dto = ItemFieldsDto {
            list_price: Some(-1.0),
            ..fields()
        };
        assert_eq!(message(ItemParams::from_dto(dto)), LIST_PRICE_NEGATIVE);
    }

    #[test]
    fn drops_borrower_when_not_checked_out() {
        let dto = ItemFieldsDto {
            checked_out: Some(false),
            checked_out_by: Some("Alex".to_string()),
            ..fields()
        };
        assert_eq!(ItemParams::from_dto(dto).unwrap().checked_out_by, None);
    }
}
