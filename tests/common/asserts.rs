use byway_cors_rs::{CorsDecision, Headers};

pub fn assert_simple_accepted(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted { headers } => headers,
        other => panic!("expected accepted simple decision, got {:?}", other),
    }
}

pub fn assert_simple_rejected(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleRejected { headers } => headers,
        other => panic!("expected rejected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight_accepted(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::PreflightAccepted { headers, status } => (headers, status),
        other => panic!("expected accepted preflight decision, got {:?}", other),
    }
}

pub fn assert_preflight_rejected(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::PreflightRejected { headers, status } => (headers, status),
        other => panic!("expected rejected preflight decision, got {:?}", other),
    }
}

pub fn assert_vary_eq<const N: usize>(headers: &Headers, expected: [&str; N]) {
    assert_eq!(super::headers::vary_values(headers), expected.to_vec());
}
