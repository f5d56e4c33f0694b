use crate::core::profiles::{ArchitectureKind, ArchitectureProfile, ReferenceCriteria};
use crate::core::requirements::{Level, TeamSize, Traffic};
use crate::scoring::strategy::ScoringStrategy;

pub static ARCHITECTURES: [ArchitectureProfile; 4] = [
    ArchitectureProfile {
        id: "monolithic",
        kind: ArchitectureKind::Monolithic,
        name: "Monolithic Architecture",
        description: "A single deployable unit containing all application functionality, \
                      sharing one codebase, one process and usually one database.",
        advantages: &[
            "Simple to develop, test and deploy",
            "Low operational overhead",
            "Straightforward debugging and tracing",
            "No network latency between modules",
        ],
        disadvantages: &[
            "Scales only as a whole",
            "Codebase becomes harder to change as it grows",
            "A single fault can take down the entire application",
            "Technology stack is fixed for every module",
        ],
        best_for: &[
            "Small teams",
            "Early-stage products and MVPs",
            "Applications with a simple, stable domain",
        ],
        criteria: ReferenceCriteria {
            user_traffic: Traffic::Low,
            complexity: Level::Low,
            team_size: TeamSize::Small,
            scalability: Level::Low,
            budget: Level::Low,
        },
        strategy: ScoringStrategy::for_kind(ArchitectureKind::Monolithic),
    },
    ArchitectureProfile {
        id: "microservices",
        kind: ArchitectureKind::Microservices,
        name: "Microservices Architecture",
        description: "A suite of small, independently deployable services, each owning its \
                      data and communicating over lightweight network protocols.",
        advantages: &[
            "Services scale independently",
            "Teams can deploy autonomously",
            "Fault isolation between services",
            "Freedom to choose technology per service",
        ],
        disadvantages: &[
            "Distributed system complexity",
            "Higher infrastructure and operational cost",
            "Data consistency across services is hard",
            "Requires mature DevOps and observability",
        ],
        best_for: &[
            "Large organizations with multiple teams",
            "Complex domains with clear bounded contexts",
            "Systems with high and uneven scalability needs",
        ],
        criteria: ReferenceCriteria {
            user_traffic: Traffic::High,
            complexity: Level::High,
            team_size: TeamSize::Large,
            scalability: Level::High,
            budget: Level::High,
        },
        strategy: ScoringStrategy::for_kind(ArchitectureKind::Microservices),
    },
    ArchitectureProfile {
        id: "serverless",
        kind: ArchitectureKind::Serverless,
        name: "Serverless Architecture",
        description: "Application logic runs as managed, event-triggered functions; the \
                      provider handles provisioning and scaling.",
        advantages: &[
            "Pay only for actual usage",
            "Automatic scaling to zero and back",
            "No server management",
            "Fast time to market",
        ],
        disadvantages: &[
            "Cold start latency",
            "Vendor lock-in",
            "Execution time and resource limits",
            "Harder local testing and debugging",
        ],
        best_for: &[
            "Event-driven workloads",
            "Variable or unpredictable traffic",
            "Small teams with limited operations capacity",
        ],
        criteria: ReferenceCriteria {
            user_traffic: Traffic::Variable,
            complexity: Level::Low,
            team_size: TeamSize::Small,
            scalability: Level::High,
            budget: Level::Low,
        },
        strategy: ScoringStrategy::for_kind(ArchitectureKind::Serverless),
    },
    ArchitectureProfile {
        id: "soa",
        kind: ArchitectureKind::Soa,
        name: "Service-Oriented Architecture",
        description: "Coarse-grained, reusable enterprise services integrated through a \
                      shared communication backbone such as an enterprise service bus.",
        advantages: &[
            "Service reuse across the enterprise",
            "Integrates heterogeneous legacy systems",
            "Centralized governance and policy enforcement",
            "Well suited to regulated environments",
        ],
        disadvantages: &[
            "Shared bus can become a bottleneck",
            "Heavyweight governance slows delivery",
            "Higher up-front design cost",
            "Coarse services limit independent scaling",
        ],
        best_for: &[
            "Enterprises integrating many existing systems",
            "Organizations with strict governance or compliance",
            "Large teams sharing common business capabilities",
        ],
        criteria: ReferenceCriteria {
            user_traffic: Traffic::Medium,
            complexity: Level::High,
            team_size: TeamSize::Large,
            scalability: Level::Medium,
            budget: Level::High,
        },
        strategy: ScoringStrategy::for_kind(ArchitectureKind::Soa),
    },
];
