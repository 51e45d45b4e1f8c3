/// Integration test target covering the seeded dashboard flow
mod dashboard_flow;
