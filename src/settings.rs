//! Settings page: the segment form that shapes which content a seller sees.

use crate::types::{Segment, UserUpdate};

/// Toast after a settings action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsNotice {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentForm {
    pub primary: Option<Segment>,
    pub secondary: Option<Segment>,
    pub geographic_area: String,
}

impl SegmentForm {
    /// Build the user update, or the error toast when no primary segment is
    /// selected.
    pub fn save(&self) -> Result<(UserUpdate, SettingsNotice), SettingsNotice> {
        let Some(primary) = self.primary else {
            return Err(SettingsNotice {
                title: "Erro",
                description: "Por favor, selecione seu segmento primário de atuação",
            });
        };
        let area = self.geographic_area.trim();
        let update = UserUpdate {
            primary_segment: Some(primary),
            secondary_segment: Some(self.secondary),
            geographic_area: Some(if area.is_empty() {
                None
            } else {
                Some(area.to_string())
            }),
            ..Default::default()
        };
        Ok((
            update,
            SettingsNotice {
                title: "Configurações salvas!",
                description: "Suas preferências de segmento foram atualizadas com sucesso.",
            },
        ))
    }
}

pub fn segment_label(segment: Option<Segment>) -> &'static str {
    segment.map(|s| s.label()).unwrap_or("Não configurado")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_segment_required() {
        let form = SegmentForm {
            geographic_area: "Centro".to_string(),
            ..Default::default()
        };
        let err = form.save().unwrap_err();
        assert_eq!(
            err.description,
            "Por favor, selecione seu segmento primário de atuação"
        );
    }

    #[test]
    fn save_builds_update() {
        let form = SegmentForm {
            primary: Some(Segment::MedicalBusiness),
            secondary: None,
            geographic_area: "  Zona Norte ".to_string(),
        };
        let (update, notice) = form.save().unwrap();
        assert_eq!(notice.title, "Configurações salvas!");
        assert_eq!(update.primary_segment, Some(Segment::MedicalBusiness));
        assert_eq!(update.geographic_area, Some(Some("Zona Norte".to_string())));
        assert_eq!(update.secondary_segment, Some(None));
        assert!(update.name.is_none());
    }

    #[test]
    fn blank_fields_are_written_as_cleared() {
        let form = SegmentForm {
            primary: Some(Segment::DoorToDoor),
            secondary: None,
            geographic_area: "   ".to_string(),
        };
        let (update, _) = form.save().unwrap();
        assert_eq!(update.secondary_segment, Some(None));
        assert_eq!(update.geographic_area, Some(None));
    }

    #[test]
    fn labels() {
        assert_eq!(segment_label(None), "Não configurado");
        assert_eq!(
            segment_label(Some(Segment::DoorToDoor)),
            "Porta em Porta (Residencial)"
        );
    }
}
