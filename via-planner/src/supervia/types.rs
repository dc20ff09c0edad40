//! SuperVia response DTOs.
//!
//! Only the fields the planner consumes are declared. Portuguese field names
//! are mapped with `rename`; missing strings default to empty because the
//! service omits them for some legs.

use serde::Deserialize;

use crate::domain::{Itinerary, Leg, Station, StationCatalog, Traject, TripOption};

/// Response from `GET /estacoes`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsResponse {
    #[serde(rename = "estacoes", default)]
    pub stations: Vec<StationDto>,
}

/// One station entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Response from `GET /planeje/{from}/{to}/{date}/{time}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripPlanResponse {
    #[serde(rename = "trajetos", default)]
    pub trajects: Vec<TrajectDto>,
}

/// A traject: alternative trips, each a list of legs.
#[derive(Debug, Clone, Deserialize)]
pub struct TrajectDto {
    #[serde(rename = "viagens", default)]
    pub trips: Vec<Vec<LegDto>>,
}

/// A single leg of a trip.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegDto {
    #[serde(rename = "estacao_origem_id")]
    pub origin_id: String,
    #[serde(rename = "estacao_origem_nome")]
    pub origin_name: String,
    #[serde(rename = "estacao_destino_id")]
    pub dest_id: String,
    #[serde(rename = "estacao_destino_nome")]
    pub dest_name: String,
    #[serde(rename = "horario_partida")]
    pub departure: String,
    #[serde(rename = "horario_chegada")]
    pub arrival: String,
    #[serde(rename = "ramal_id")]
    pub extension_id: String,
    #[serde(rename = "ramal_nome")]
    pub extension_name: String,
}

impl From<StationsResponse> for StationCatalog {
    fn from(response: StationsResponse) -> Self {
        response
            .stations
            .into_iter()
            .map(|s| Station::new(s.id, s.name))
            .collect()
    }
}

impl From<LegDto> for Leg {
    fn from(dto: LegDto) -> Self {
        Leg {
            origin_id: dto.origin_id,
            origin_name: dto.origin_name,
            dest_id: dto.dest_id,
            dest_name: dto.dest_name,
            departure: dto.departure,
            arrival: dto.arrival,
            extension_id: dto.extension_id,
            extension_name: dto.extension_name,
        }
    }
}

impl From<TripPlanResponse> for Itinerary {
    fn from(response: TripPlanResponse) -> Self {
        let trajects = response
            .trajects
            .into_iter()
            .map(|t| Traject {
                options: t
                    .trips
                    .into_iter()
                    .map(|legs| TripOption {
                        legs: legs.into_iter().map(Leg::from).collect(),
                    })
                    .collect(),
            })
            .collect();
        Itinerary { trajects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_stations() {
        let json = r#"{
            "estacoes": [
                {"id": "central", "nome": "Central do Brasil", "lat": -22.9},
                {"id": "santa_cruz", "nome": "Santa Cruz"}
            ]
        }"#;

        let response: StationsResponse = serde_json::from_str(json).unwrap();
        let catalog = StationCatalog::from(response);

        let stations: Vec<_> = catalog.iter().cloned().collect();
        assert_eq!(
            stations,
            vec![
                Station::new("central", "Central do Brasil"),
                Station::new("santa_cruz", "Santa Cruz"),
            ]
        );
    }

    #[test]
    fn deserialize_trip_plan() {
        let json = r#"{
            "trajetos": [
                {
                    "viagens": [
                        [
                            {
                                "estacao_origem_id": "central",
                                "estacao_origem_nome": "Central do Brasil",
                                "estacao_destino_id": "deodoro",
                                "estacao_destino_nome": "Deodoro",
                                "horario_partida": "14:32:00",
                                "horario_chegada": "15:05:00",
                                "ramal_id": "santa_cruz",
                                "ramal_nome": "Santa Cruz"
                            },
                            {
                                "estacao_origem_id": "deodoro",
                                "estacao_origem_nome": "Deodoro",
                                "estacao_destino_id": "japeri",
                                "estacao_destino_nome": "Japeri",
                                "horario_chegada": "15:50:00",
                                "ramal_id": "japeri"
                            }
                        ]
                    ]
                }
            ]
        }"#;

        let response: TripPlanResponse = serde_json::from_str(json).unwrap();
        let itinerary = Itinerary::from(response);

        assert_eq!(itinerary.trajects.len(), 1);
        let option = &itinerary.trajects[0].options[0];
        assert_eq!(option.legs.len(), 2);
        assert_eq!(option.legs[0].departure, "14:32:00");
        assert_eq!(option.legs[0].extension_id, "santa_cruz");
        assert_eq!(option.legs[1].departure, "");
        assert_eq!(option.legs[1].extension_name, "");
        assert_eq!(option.legs[1].dest_name, "Japeri");
    }

    #[test]
    fn missing_trajects_is_empty_itinerary() {
        let response: TripPlanResponse = serde_json::from_str("{}").unwrap();
        assert!(Itinerary::from(response).is_empty());
    }
}
