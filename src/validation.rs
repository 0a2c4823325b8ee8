use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Checks a create payload and yields the fields that will be stored.
pub trait Validate {
    type Draft;
    fn validate(self) -> Result<Self::Draft, ValidationError>;
}

#[derive(Deserialize, Debug, Default)]
pub struct ArtistPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AlbumPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct TrackPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, PartialEq)]
pub struct ArtistDraft {
    pub name: String,
    pub age: i64,
}

#[derive(Debug, PartialEq)]
pub struct AlbumDraft {
    pub name: String,
    pub genre: String,
}

#[derive(Debug, PartialEq)]
pub struct TrackDraft {
    pub name: String,
    pub duration: f64,
}

fn required_text(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(ValidationError(format!("{} must not be empty", field))),
        None => Err(ValidationError(format!("{} is required", field))),
    }
}

impl Validate for ArtistPayload {
    type Draft = ArtistDraft;

    fn validate(self) -> Result<ArtistDraft, ValidationError> {
        let name = required_text("name", self.name)?;
        let age = match self.age {
            Some(age) if age > 0 => age,
            Some(_) => return Err(ValidationError("age must be a positive integer".into())),
            None => return Err(ValidationError("age is required".into())),
        };
        Ok(ArtistDraft { name, age })
    }
}

impl Validate for AlbumPayload {
    type Draft = AlbumDraft;

    fn validate(self) -> Result<AlbumDraft, ValidationError> {
        let name = required_text("name", self.name)?;
        let genre = required_text("genre", self.genre)?;
        Ok(AlbumDraft { name, genre })
    }
}

impl Validate for TrackPayload {
    type Draft = TrackDraft;

    fn validate(self) -> Result<TrackDraft, ValidationError> {
        let name = required_text("name", self.name)?;
        let duration = match self.duration {
            Some(duration) if duration.is_finite() && duration > 0.0 => duration,
            Some(_) => return Err(ValidationError("duration must be greater than zero".into())),
            None => return Err(ValidationError("duration is required".into())),
        };
        Ok(TrackDraft { name, duration })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(json: &str) -> Result<ArtistDraft, ValidationError> {
        serde_json::from_str::<ArtistPayload>(json).unwrap().validate()
    }

    #[test]
    fn artist_accepts_name_and_positive_age() {
        assert_eq!(
            artist(r#"{"name": "Daft Punk", "age": 50}"#),
            Ok(ArtistDraft {
                name: "Daft Punk".to_string(),
                age: 50
            })
        );
    }

    #[test]
    fn artist_rejects_missing_or_bad_fields() {
        assert!(artist(r#"{"age": 50}"#).is_err());
        assert!(artist(r#"{"name": "", "age": 50}"#).is_err());
        assert!(artist(r#"{"name": "   ", "age": 50}"#).is_err());
        assert!(artist(r#"{"name": "Daft Punk"}"#).is_err());
        assert!(artist(r#"{"name": "Daft Punk", "age": 0}"#).is_err());
        assert!(artist(r#"{"name": "Daft Punk", "age": -3}"#).is_err());
        assert!(artist("{}").is_err());
    }

    #[test]
    fn mistyped_fields_fail_to_parse() {
        assert!(serde_json::from_str::<ArtistPayload>(r#"{"name": "x", "age": "50"}"#).is_err());
        assert!(serde_json::from_str::<ArtistPayload>(r#"{"name": "x", "age": 50.5}"#).is_err());
        assert!(serde_json::from_str::<ArtistPayload>(r#"{"name": 7, "age": 50}"#).is_err());
        assert!(serde_json::from_str::<TrackPayload>(r#"{"name": "x", "duration": "3"}"#).is_err());
    }

    #[test]
    fn album_needs_name_and_genre() {
        let ok = AlbumPayload {
            name: Some("Discovery".into()),
            genre: Some("Electronic".into()),
        };
        assert!(ok.validate().is_ok());

        let no_genre = AlbumPayload {
            name: Some("Discovery".into()),
            genre: None,
        };
        assert_eq!(
            no_genre.validate(),
            Err(ValidationError("genre is required".into()))
        );
        assert!(AlbumPayload::default().validate().is_err());
    }

    #[test]
    fn track_duration_must_be_positive() {
        let track = |duration| TrackPayload {
            name: Some("One More Time".into()),
            duration,
        };
        assert_eq!(
            track(Some(320.5)).validate(),
            Ok(TrackDraft {
                name: "One More Time".into(),
                duration: 320.5
            })
        );
        assert!(track(Some(0.0)).validate().is_err());
        assert!(track(Some(-1.0)).validate().is_err());
        assert!(track(None).validate().is_err());
    }

    #[test]
    fn integer_duration_is_a_number() {
        let payload: TrackPayload =
            serde_json::from_str(r#"{"name": "Aerodynamic", "duration": 212}"#).unwrap();
        assert_eq!(payload.validate().unwrap().duration, 212.0);
    }
}
