//! Portfolio content commands.
//!
//! Each one prints a fixed block of text. They are table-driven: adding a
//! section means adding a [`Section`] to [`SECTIONS`].

use folio_types::error::Result;

use crate::interpreter::{Category, Command, Environment};
use crate::registry::CommandRegistry;

/// A fixed block of portfolio text exposed as a command.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub lines: &'static [&'static str],
}

impl Command for Section {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn category(&self) -> Category {
        self.category
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<Vec<String>> {
        Ok(self.lines.iter().map(|l| l.to_string()).collect())
    }
}

/// Register every section in [`SECTIONS`] order.
pub fn register_profile_commands(reg: &mut CommandRegistry) -> Result<()> {
    for s in SECTIONS.iter() {
        reg.register(Box::new(*s))?;
    }
    Ok(())
}

pub static SECTIONS: [Section; 15] = [
    Section {
        name: "about",
        description: "detailed about section",
        category: Category::Core,
        lines: &[
            "about:",
            "  name: Aaron David",
            "  role: Computer Science BSc Student @ University of Glasgow",
            "        Head Software Engineer @ UGRacing Driverless",
            "  location: Glasgow, Scotland",
            "  languages: Python · C++ · C · Java · Bash · HTML · CSS",
            "",
            "  summary: Computer Science student focused on autonomous racing systems,",
            "           SLAM, and path planning on UGRacing's driverless Formula",
            "           Student team, with experience leading a large C++/Python",
            "           codebase and mentoring new recruits.",
        ],
    },
    Section {
        name: "bio",
        description: "short personal summary",
        category: Category::Core,
        lines: &[
            "bio:",
            "  computer science student at the university of glasgow.",
            "  building autonomous systems · specialising in SLAM + planning.",
            "  head software engineer for UGRacing's driverless team.",
            "  interested in robotics, optimisation, simulation, and high-performance code.",
            "",
        ],
    },
    Section {
        name: "whoami",
        description: "identity info",
        category: Category::Core,
        lines: &[
            "whoami:",
            "  aaron david",
            "  cs student · autonomous systems developer",
            "  specialising in slam, planning, and robotics software",
            "  currently: head software engineer @ ugracing driverless",
            "",
        ],
    },
    Section {
        name: "skills",
        description: "technical skills & domains",
        category: Category::Core,
        lines: &[
            "skills:",
            "",
            "  languages:",
            "    python · c++ · c · java · bash · html · css",
            "",
            "  libraries / frameworks:",
            "    numpy · scipy · matplotlib · pandas · eigen",
            "    django · ros2",
            "",
            "  tools & platforms:",
            "    git · linux · cmake · make · docker · gdb · callgrind",
            "    vscode · rviz · gazebo · ZED SDK · Foxglove",
            "",
            "  practices:",
            "    tdd · ci/cd · code reviews · simulation testing",
            "    feature branching · modular architecture",
            "",
            "  domains:",
            "    autonomous racing · slam · localisation · path planning",
            "    simulation-based testing and real-time systems",
        ],
    },
    Section {
        name: "stack",
        description: "core robotics / dev stack",
        category: Category::Core,
        lines: &[
            "stack:",
            "  robotics: ros2 · rviz · foxglove · zed sdk",
            "  programming: python · c++ · bash",
            "  math & optimisation: numpy · scipy · eigen",
            "  devops: docker · cmake · git · gdb · callgrind",
            "  simulation: gazebo · custom tooling · CARLA",
            "",
        ],
    },
    Section {
        name: "projects",
        description: "selected technical projects",
        category: Category::Core,
        lines: &[
            "projects:",
            "",
            "  [1] Graph SLAM for Localisation and Mapping (C++, ROS2)",
            "      summary: Full SLAM system estimating vehicle pose and mapping",
            "               features in real time with EKF-style updates and a",
            "               sparse pose graph.",
            "",
            "  [2] Primary Path Planner for Autonomous Racing (Python, ROS2)",
            "      summary: Custom NURBS-based planner replacing legacy Delaunay +",
            "               beam search pipeline for cone-based tracks.",
            "",
            "  [3] Cone Ordering System (Python, ROS2)",
            "      summary: Preprocessing module to order unordered cone detections",
            "               into a consistent structure for planning.",
            "",
            "  [4] Personal Portfolio Website (HTML, CSS, JS)",
            "      summary: This very website! A terminal-style interactive portfolio",
            "               built with vanilla JS, HTML, and CSS.",
            "",
        ],
    },
    Section {
        name: "ugracing",
        description: "UGRacing driverless roles",
        category: Category::Core,
        lines: &[
            "projects: UGRacing Driverless",
            "",
            "  [1] Head Software Engineer (2025–2026)",
            "      team: 30 developers across Perception · Path Planning · Simulation",
            "      role:",
            "        - Led development across a 90k-line C++/Python autonomous systems codebase.",
            "        - Guided technical direction for three subteams and ensured system integration.",
            "        - Developed a custom Graph SLAM system (C++/ROS2) including:",
            "            · Mahalanobis data association",
            "            · EKF-style landmark updates",
            "            · Sparse pose graph optimisation (Gauss-Newton + Cholesky)",
            "            · Loop closure detection and map recentring",
            "        - Delivered onboarding workshops, robot demos, and technical training sessions.",
            "      stack:",
            "        Python · C++ · Bash · ROS2 · NumPy · SciPy · Eigen · Gazebo · Docker · Git · CMake · Linux",
            "",
        ],
    },
    Section {
        name: "contact",
        description: "how to reach me",
        category: Category::Core,
        lines: &[
            "contact:",
            "  email: aarondavid1805@gmail.com",
            "  github: https://github.com/aarondav1d18",
            "  linkedin: https://www.linkedin.com/in/aarondav1d",
            "",
            "  open to: internships · student roles · technical collaboration",
        ],
    },
    Section {
        name: "links",
        description: "external profiles & cv link",
        category: Category::Core,
        lines: &[
            "links:",
            "  github:   https://github.com/aarondav1d18",
            "  linkedin: https://www.linkedin.com/in/aarondav1d",
            "",
        ],
    },
    Section {
        name: "experience",
        description: "work & leadership experience",
        category: Category::Background,
        lines: &[
            "experience:",
            "",
            "  UGRacing Driverless — University of Glasgow",
            "    Path Planning Engineer → Head of Path Planning → Head Software Engineer",
            "    2023–present",
            "      - Led development of autonomous race car software (C++/Python, ROS2).",
            "      - Managed 3 subteams: Perception · Path Planning · Simulation.",
            "      - Mentored new recruits and ran onboarding workshops.",
            "",
            "  Home Bargains — Store Assistant",
            "    2022–2023",
            "      - Customer service, stock management, and training new hires.",
            "",
        ],
    },
    Section {
        name: "education",
        description: "education history",
        category: Category::Background,
        lines: &[
            "education:",
            "",
            "  University of Glasgow — BSc Computer Science",
            "    2023–2027",
            "    focus: systems, software engineering, and autonomous systems",
            "",
            "  Bryntirion Comprehensive School — A-Levels",
            "    2021–2023",
            "    computer science · mathematics · physics (AAB)",
            "",
        ],
    },
    Section {
        name: "achievements",
        description: "awards, demos, competitions",
        category: Category::Background,
        lines: &[
            "achievements:",
            "",
            "  Driverless Branch Award",
            "    recognised for key technical contributions to path planning",
            "    and localisation on UGRacing's autonomous systems.",
            "",
            "  Technical demos & representation (2024–present)",
            "    - Delivered hands-on driverless system demos at university open days.",
            "    - Represented UGRacing at the CENSIS Tech Summit.",
            "    - Presented autonomous systems at Formula Student UK (Silverstone).",
            "",
            "  competitions:",
            "    - Formula Student UK (FSUK), Silverstone — autonomous systems track.",
            "       3rd place (2024)",
            "       3rd place (2025)",
            "       hopefully 3rd place (2026)",
            "",
        ],
    },
    Section {
        name: "demos",
        description: "public demos & outreach",
        category: Category::Background,
        lines: &[
            "demos:",
            "  - open day autonomous system demos",
            "  - representation at the CENSIS tech summit",
            "  - fsuk presentations & technical briefings",
            "",
        ],
    },
    Section {
        name: "fsuk",
        description: "formula student uk results",
        category: Category::Background,
        lines: &[
            "fsuk:",
            "  2024: 3rd place — autonomous class",
            "  2025: 3rd place — autonomous class",
            "  2026: ??? place — we manifest greatness",
            "",
        ],
    },
    Section {
        name: "ascii",
        description: "tiny ascii banner",
        category: Category::Fun,
        lines: &[
            "    /\\                          ",
            "   /  \\   __ _ _ __ ___  _ __  ",
            "  / /\\ \\ / _` | '__/ _ \\| '_ \\ ",
            " / ____ \\ (_| | | | (_) | | | |",
            "/_/    \\_\\__,_|_|  \\___/|_| |_|",
            "aaron david — student, autonomy, slam, path planning",
            "",
        ],
    },
];
