use crate::entities::Route;

/// Lists the turn-by-turn instructions of a computed route, one row per
/// step, in route order.
pub struct StepListPresenter {
    rows: Vec<String>,
}

impl StepListPresenter {
    pub fn new(route: &Route) -> Self {
        Self {
            rows: route.instructions(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dismisses the list. No effect on any workflow state.
    pub fn done(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{RouteStep, TransportMode};
    use geo_types::{Coord, LineString, Rect};

    fn route(instructions: &[&str]) -> Route {
        let steps = instructions
            .iter()
            .map(|text| RouteStep {
                instructions: (*text).into(),
                path: LineString::from(vec![
                    Coord { x: 0.0, y: 0.0 },
                    Coord { x: 1.0, y: 1.0 },
                ]),
            })
            .collect();

        Route::new(
            TransportMode::Automobile,
            steps,
            LineString::from(vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }]),
            Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }),
            100.0,
            60.0,
        )
    }

    #[test]
    fn one_row_per_step_in_order() {
        let presenter = StepListPresenter::new(&route(&["Head north", "Turn right", "Arrive"]));

        assert_eq!(presenter.len(), 3);
        assert_eq!(presenter.rows(), ["Head north", "Turn right", "Arrive"]);
    }

    #[test]
    fn empty_route_presents_no_rows() {
        let presenter = StepListPresenter::new(&route(&[]));

        assert!(presenter.is_empty());
    }
}
