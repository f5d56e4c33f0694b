use crate::core::profiles::{ArchitectureKind, DesignPatternProfile, Rating};
use crate::scoring::pattern_rules::PatternRule;

use ArchitectureKind::{Microservices, Monolithic, Serverless, Soa};

pub static PATTERNS: [DesignPatternProfile; 12] = [
    DesignPatternProfile {
        id: "api-gateway",
        name: "API Gateway",
        description: "Single entry point that routes, authenticates and aggregates client \
                      requests to backend services.",
        use_case: "Exposing many services behind one secured, rate-limited endpoint",
        applicable_architectures: &[Microservices, Serverless],
        complexity: Rating::Medium,
        performance: Rating::Medium,
        maintainability: Rating::High,
        rule: PatternRule::ApiGateway,
    },
    DesignPatternProfile {
        id: "circuit-breaker",
        name: "Circuit Breaker",
        description: "Stops calling a failing dependency after repeated errors and retries \
                      after a cool-down period.",
        use_case: "Preventing cascading failures between remote services",
        applicable_architectures: &[Microservices, Soa],
        complexity: Rating::Low,
        performance: Rating::High,
        maintainability: Rating::High,
        rule: PatternRule::CircuitBreaker,
    },
    DesignPatternProfile {
        id: "event-sourcing",
        name: "Event Sourcing",
        description: "Persists state as an append-only sequence of domain events instead \
                      of current values.",
        use_case: "Audit trails and rebuilding state for complex domains",
        applicable_architectures: &[Microservices, Serverless],
        complexity: Rating::High,
        performance: Rating::Medium,
        maintainability: Rating::Medium,
        rule: PatternRule::EventSourcing,
    },
    DesignPatternProfile {
        id: "cqrs",
        name: "CQRS",
        description: "Separates the write model from one or more read models optimized \
                      for queries.",
        use_case: "Read-heavy workloads with different read and write shapes",
        applicable_architectures: &[Microservices, Monolithic],
        complexity: Rating::High,
        performance: Rating::High,
        maintainability: Rating::Medium,
        rule: PatternRule::Cqrs,
    },
    DesignPatternProfile {
        id: "saga",
        name: "Saga",
        description: "Coordinates a distributed transaction as a sequence of local \
                      transactions with compensating actions.",
        use_case: "Business processes spanning several services' data stores",
        applicable_architectures: &[Microservices, Soa],
        complexity: Rating::High,
        performance: Rating::Medium,
        maintainability: Rating::Medium,
        rule: PatternRule::Saga,
    },
    DesignPatternProfile {
        id: "service-registry",
        name: "Service Registry",
        description: "Keeps a live directory of service instances so clients can discover \
                      them at runtime.",
        use_case: "Dynamic environments where instances scale up and down",
        applicable_architectures: &[Microservices, Soa],
        complexity: Rating::Medium,
        performance: Rating::Medium,
        maintainability: Rating::High,
        rule: PatternRule::ServiceRegistry,
    },
    DesignPatternProfile {
        id: "layered",
        name: "Layered Architecture",
        description: "Organizes code into presentation, business and persistence layers \
                      with strict downward dependencies.",
        use_case: "Keeping a single codebase understandable as it grows",
        applicable_architectures: &[Monolithic],
        complexity: Rating::Low,
        performance: Rating::Medium,
        maintainability: Rating::High,
        rule: PatternRule::Layered,
    },
    DesignPatternProfile {
        id: "repository",
        name: "Repository",
        description: "Mediates between the domain and data mapping layers behind a \
                      collection-like interface.",
        use_case: "Isolating business logic from persistence details",
        applicable_architectures: &[Monolithic, Microservices, Soa],
        complexity: Rating::Low,
        performance: Rating::Medium,
        maintainability: Rating::High,
        rule: PatternRule::Repository,
    },
    DesignPatternProfile {
        id: "strangler-fig",
        name: "Strangler Fig",
        description: "Incrementally replaces parts of a legacy system by routing features \
                      to new implementations.",
        use_case: "Migrating away from a legacy system without a big-bang rewrite",
        applicable_architectures: &[Monolithic, Microservices],
        complexity: Rating::Medium,
        performance: Rating::Medium,
        maintainability: Rating::High,
        rule: PatternRule::StranglerFig,
    },
    DesignPatternProfile {
        id: "backend-for-frontend",
        name: "Backend for Frontend",
        description: "Dedicated backend per client type that tailors APIs to that client's \
                      needs.",
        use_case: "Web and mobile clients with diverging data requirements",
        applicable_architectures: &[Microservices, Serverless],
        complexity: Rating::Medium,
        performance: Rating::High,
        maintainability: Rating::Medium,
        rule: PatternRule::BackendForFrontend,
    },
    DesignPatternProfile {
        id: "enterprise-service-bus",
        name: "Enterprise Service Bus",
        description: "Central messaging backbone providing routing, transformation and \
                      protocol mediation between services.",
        use_case: "Integrating heterogeneous enterprise and legacy systems",
        applicable_architectures: &[Soa],
        complexity: Rating::High,
        performance: Rating::Low,
        maintainability: Rating::Medium,
        rule: PatternRule::EnterpriseServiceBus,
    },
    DesignPatternProfile {
        id: "function-fan-out",
        name: "Function Fan-Out",
        description: "Splits work into many parallel function invocations triggered from a \
                      single event, then aggregates results.",
        use_case: "Bursty batch processing with highly parallel steps",
        applicable_architectures: &[Serverless],
        complexity: Rating::Medium,
        performance: Rating::High,
        maintainability: Rating::Medium,
        rule: PatternRule::FunctionFanOut,
    },
];
