use std::fmt;


#[derive(Debug, Clone, PartialEq)]
pub enum PathPlannerError {
    NoPathFound, // Goal is unreachable from the start
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    InvalidObstacleProportion(f64), // Proportion must lie within [0, 1]
}


impl fmt::Display for PathPlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPlannerError::NoPathFound => write!(f, "no path found from start to goal"),
        }
    }
}

impl std::error::Error for PathPlannerError {}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidObstacleProportion(p) => {
                write!(f, "obstacle proportion {p} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for GridError {}
