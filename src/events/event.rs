use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadNodeSelect {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadNodeDeselect {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadEdgeAdd {
    pub id: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadNodeMove {
    pub id: String,
    pub diff: [f32; 2],
    pub new_pos: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadCenter {
    pub target: [f32; 2],
    pub zoom: f32,
    pub duration_ms: u64,
}

/// Accepted interaction reported by [`crate::DependencyGraphView`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    NodeSelect(PayloadNodeSelect),
    NodeDeselect(PayloadNodeDeselect),
    EdgeAdd(PayloadEdgeAdd),
    NodeMove(PayloadNodeMove),
    CenterRequest(PayloadCenter),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contract_node_select() {
        let event = Event::NodeSelect(PayloadNodeSelect {
            id: "lib-api".to_string(),
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"NodeSelect":{"id":"lib-api"}}"#);

        let event: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(
            event,
            Event::NodeSelect(PayloadNodeSelect {
                id: "lib-api".to_string()
            })
        );
    }

    #[test]
    fn test_contract_edge_add() {
        let event = Event::EdgeAdd(PayloadEdgeAdd {
            id: "e-a-b".to_string(),
            source: "a".to_string(),
            target: "b".to_string(),
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"EdgeAdd":{"id":"e-a-b","source":"a","target":"b"}}"#
        );

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_contract_center() {
        let event = Event::CenterRequest(PayloadCenter {
            target: [200.0, 300.0],
            zoom: 1.5,
            duration_ms: 800,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"CenterRequest":{"target":[200.0,300.0],"zoom":1.5,"duration_ms":800}}"#
        );
    }
}
