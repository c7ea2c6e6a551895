//! Resume-side records and the schemas the pipeline normalizes them against.

use serde::{Deserialize, Serialize};

use crate::pipeline::{EntryLayout, Field, Rejection, Schema, StructuredOutput};

// ────────────────────────────────────────────────────────────────────────────
// Schemas
// ────────────────────────────────────────────────────────────────────────────

pub static WORK_EXPERIENCE_SCHEMA: Schema = Schema {
    name: "work_experience",
    fields: &[
        Field::text("company").aliases(&["employer", "organization"]),
        Field::text("title").aliases(&["role", "position", "job_title"]),
        Field::text("dates").aliases(&["date_range", "duration", "period"]),
        Field::text_list("accomplishments").aliases(&[
            "achievements",
            "bullets",
            "responsibilities",
            "highlights",
        ]),
    ],
};

pub static EDUCATION_SCHEMA: Schema = Schema {
    name: "education",
    fields: &[
        Field::text("institution").aliases(&["school", "university"]),
        Field::text("degree").aliases(&["qualification", "program"]),
        Field::text("dates").aliases(&["date_range", "graduation_date", "year"]),
        Field::text_list("details").aliases(&["highlights", "achievements", "coursework"]),
    ],
};

pub static PROJECT_SCHEMA: Schema = Schema {
    name: "project",
    fields: &[
        Field::text("name").aliases(&["title", "project_name"]),
        Field::text("description"),
        Field::text_list("technologies").aliases(&["tech_stack", "tools"]),
    ],
};

const WORK_LAYOUT: EntryLayout = EntryLayout {
    primary: "company",
    secondary: "title",
    dates: "dates",
    items: "accomplishments",
};

const EDUCATION_LAYOUT: EntryLayout = EntryLayout {
    primary: "institution",
    secondary: "degree",
    dates: "dates",
    items: "details",
};

/// Fields shared by the structured and optimized resume schemas, followed by
/// any extra fields.
macro_rules! resume_fields {
    ($($extra:expr),* $(,)?) => {
        &[
            Field::text("summary")
                .aliases(&["Summary", "professional_summary"])
                .headings(&["summary", "professional summary", "profile"]),
            Field::records("work_experience", &WORK_EXPERIENCE_SCHEMA, Some(WORK_LAYOUT))
                .aliases(&["WorkExperience", "experience", "work_history"])
                .headings(&[
                    "work experience",
                    "experience",
                    "professional experience",
                    "employment history",
                ]),
            Field::text_list("technical_skills")
                .aliases(&["TechnicalSkills", "skills"])
                .headings(&["technical skills", "skills", "core competencies"]),
            Field::records("education", &EDUCATION_SCHEMA, Some(EDUCATION_LAYOUT))
                .aliases(&["Education"])
                .headings(&["education"]),
            Field::text_list("certifications")
                .aliases(&["Certifications"])
                .headings(&["certifications", "certificates"]),
            Field::records("projects", &PROJECT_SCHEMA, None)
                .aliases(&["Projects"])
                .headings(&["projects"]),
            $($extra),*
        ]
    };
}

pub static STRUCTURED_RESUME_SCHEMA: Schema = Schema {
    name: "structured_resume",
    fields: resume_fields!(),
};

pub static OPTIMIZED_RESUME_SCHEMA: Schema = Schema {
    name: "optimized_resume",
    fields: resume_fields!(Field::text_list("optimization_notes")
        .aliases(&["notes", "changes_made"])
        .headings(&["optimization notes", "changes made"])),
};

pub static JOB_REQUIREMENTS_SCHEMA: Schema = Schema {
    name: "job_requirements",
    fields: &[
        Field::text_list("required_skills")
            .aliases(&["requirements", "must_have"])
            .headings(&["required skills", "requirements"]),
        Field::text_list("preferred_skills")
            .aliases(&["nice_to_have", "preferred"])
            .headings(&["preferred skills", "nice to have"]),
        Field::text("experience_level")
            .aliases(&["seniority", "experience"])
            .headings(&["experience level"]),
        Field::text_list("education_requirements")
            .aliases(&["education"])
            .headings(&["education requirements", "education"]),
        Field::text_list("job_responsibilities")
            .aliases(&["responsibilities"])
            .headings(&["job responsibilities", "responsibilities"]),
    ],
};

pub static MATCH_ANALYSIS_SCHEMA: Schema = Schema {
    name: "match_analysis",
    fields: &[
        Field::number("match_score").aliases(&["score", "overall_score"]),
        Field::text_list("matched_skills")
            .aliases(&["matching_skills"])
            .headings(&["matched skills", "matching skills"]),
        Field::text_list("missing_skills")
            .aliases(&["skill_gaps", "gaps"])
            .headings(&["missing skills", "skill gaps"]),
        Field::text_list("strengths").headings(&["strengths"]),
        Field::text_list("recommendations")
            .aliases(&["suggestions"])
            .headings(&["recommendations", "suggestions"]),
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub title: String,
    pub dates: String,
    pub accomplishments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub dates: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// A resume broken into canonical sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredResume {
    pub summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub technical_skills: Vec<String>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
    pub projects: Vec<Project>,
}

impl StructuredResume {
    /// True when none of the core sections carry anything.
    pub fn is_blank(&self) -> bool {
        self.summary.trim().is_empty()
            && self.work_experience.is_empty()
            && self.technical_skills.is_empty()
            && self.education.is_empty()
    }
}

impl StructuredOutput for StructuredResume {
    fn schema() -> &'static Schema {
        &STRUCTURED_RESUME_SCHEMA
    }

    // A sparse resume is still a resume; only non-object output is rejected,
    // and that happens before conversion.
    fn check_usable(&self) -> Result<(), Rejection> {
        Ok(())
    }
}

/// A resume rewritten against a job description, plus what was changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedResume {
    #[serde(flatten)]
    pub resume: StructuredResume,
    pub optimization_notes: Vec<String>,
}

impl StructuredOutput for OptimizedResume {
    fn schema() -> &'static Schema {
        &OPTIMIZED_RESUME_SCHEMA
    }

    fn check_usable(&self) -> Result<(), Rejection> {
        if self.resume.is_blank() {
            return Err(Rejection::empty(
                "optimized resume has no summary, experience, skills or education",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_level: String,
    pub education_requirements: Vec<String>,
    pub job_responsibilities: Vec<String>,
}

impl StructuredOutput for JobRequirements {
    fn schema() -> &'static Schema {
        &JOB_REQUIREMENTS_SCHEMA
    }

    fn check_usable(&self) -> Result<(), Rejection> {
        if self.required_skills.is_empty()
            && self.preferred_skills.is_empty()
            && self.experience_level.trim().is_empty()
            && self.education_requirements.is_empty()
            && self.job_responsibilities.is_empty()
        {
            return Err(Rejection::empty("no requirements were extracted"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    /// 0–100.
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

impl StructuredOutput for MatchAnalysis {
    fn schema() -> &'static Schema {
        &MATCH_ANALYSIS_SCHEMA
    }

    fn check_usable(&self) -> Result<(), Rejection> {
        if !(0.0..=100.0).contains(&self.match_score) {
            return Err(Rejection::invalid(format!(
                "match_score {} is outside 0-100",
                self.match_score
            )));
        }
        if self.match_score == 0.0 && self.matched_skills.is_empty() && self.missing_skills.is_empty()
        {
            return Err(Rejection::empty("match analysis has no score and no skills"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::OutputMode;
    use crate::pipeline::{interpret, normalize, ErrorKind};
    use serde_json::json;

    #[test]
    fn test_truncated_resume_keeps_entries_with_nested_skills() {
        let raw = r#"{"summary":"Backend engineer","work_experience":[{"company":"Acme","title":"SRE","dates":"2019 - 2023","accomplishments":["Cut pages"],"skills":["Go"]},{"company":"Globex","title":"Dev","dates":"2018"}],"technical_skills":["Rust","Kafk"#;
        let resume: StructuredResume = interpret(raw, OutputMode::Json).unwrap();
        assert_eq!(resume.work_experience.len(), 2);
        assert_eq!(resume.work_experience[0].company, "Acme");
        assert_eq!(resume.work_experience[0].accomplishments, vec!["Cut pages"]);
        assert_eq!(resume.work_experience[1].title, "Dev");
        assert_eq!(resume.technical_skills, vec!["Rust"]);
    }

    #[test]
    fn test_structured_resume_resolves_legacy_keys() {
        let raw = r#"{
            "Summary": "Platform engineer",
            "experience": [
                {"employer": "Acme", "role": "SRE", "duration": "2019 - 2023", "bullets": ["Cut pages by half"]},
                {"company": "Globex", "job_title": "Intern", "highlights": ["Wrote docs"]}
            ],
            "skills": ["Rust", "Terraform"],
            "Education": [{"school": "State U", "qualification": "BSc CS", "year": "2018"}],
            "Projects": [{"title": "tinykv", "tech_stack": ["Rust"]}]
        }"#;
        let resume: StructuredResume = interpret(raw, OutputMode::Json).unwrap();

        assert_eq!(resume.summary, "Platform engineer");
        assert_eq!(
            resume.work_experience,
            vec![
                WorkExperience {
                    company: "Acme".into(),
                    title: "SRE".into(),
                    dates: "2019 - 2023".into(),
                    accomplishments: vec!["Cut pages by half".into()],
                },
                WorkExperience {
                    company: "Globex".into(),
                    title: "Intern".into(),
                    dates: String::new(),
                    accomplishments: vec!["Wrote docs".into()],
                },
            ]
        );
        assert_eq!(resume.technical_skills, vec!["Rust", "Terraform"]);
        assert_eq!(resume.education[0].institution, "State U");
        assert_eq!(resume.education[0].degree, "BSc CS");
        assert_eq!(resume.education[0].dates, "2018");
        assert_eq!(resume.projects[0].name, "tinykv");
        assert_eq!(resume.projects[0].technologies, vec!["Rust"]);
        assert!(resume.certifications.is_empty());
    }

    #[test]
    fn test_structured_resume_from_plain_text_sections() {
        let raw = "\
Summary
Data engineer focused on streaming systems.

Experience
Senior Data Engineer at Initech (2020 - Present)
- Built a Kafka ingestion layer handling 2M events/s

Education
State University, BSc Computer Science, 2016
- Dean's list

Skills
- Kafka
- Spark";
        let resume: StructuredResume = interpret(raw, OutputMode::Json).unwrap();
        assert_eq!(resume.summary, "Data engineer focused on streaming systems.");
        assert_eq!(resume.work_experience.len(), 1);
        assert_eq!(resume.work_experience[0].company, "Initech");
        assert_eq!(resume.work_experience[0].title, "Senior Data Engineer");
        assert_eq!(resume.work_experience[0].dates, "2020 - Present");
        assert_eq!(resume.education[0].institution, "State University");
        assert_eq!(resume.education[0].degree, "BSc Computer Science");
        assert_eq!(resume.education[0].dates, "2016");
        assert_eq!(resume.education[0].details, vec!["Dean's list"]);
        assert_eq!(resume.technical_skills, vec!["Kafka", "Spark"]);
    }

    #[test]
    fn test_structured_resume_rejects_non_object_shape() {
        let err = crate::pipeline::validate::<StructuredResume>(json!(["not", "a", "resume"]), "[]")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::SchemaInvalid);
    }

    #[test]
    fn test_optimized_resume_flattens_and_requires_content() {
        let raw = "I emphasized the Kafka work and trimmed older roles.\n\
            {\"summary\": \"Streaming specialist\", \"skills\": [\"Kafka\"], \"notes\": [\"Moved Kafka to the top\"]}";
        let optimized: OptimizedResume = interpret(raw, OutputMode::EmbeddedJson).unwrap();
        assert_eq!(optimized.resume.summary, "Streaming specialist");
        assert_eq!(optimized.resume.technical_skills, vec!["Kafka"]);
        assert_eq!(optimized.optimization_notes, vec!["Moved Kafka to the top"]);

        let err = interpret::<OptimizedResume>(
            "Nothing to change.\n{\"optimization_notes\": [\"none\"]}",
            OutputMode::EmbeddedJson,
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyResult);
    }

    #[test]
    fn test_optimized_resume_serializes_flat() {
        let value = normalize(&json!({"summary": "x"}), &OPTIMIZED_RESUME_SCHEMA);
        let optimized: OptimizedResume = serde_json::from_value(value).unwrap();
        let out = serde_json::to_value(&optimized).unwrap();
        assert_eq!(out["summary"], json!("x"));
        assert_eq!(out["optimization_notes"], json!([]));
        assert!(out.get("resume").is_none());
    }

    #[test]
    fn test_match_score_range_is_enforced() {
        let err = interpret::<MatchAnalysis>(
            r#"{"match_score": 140, "matched_skills": ["Go"]}"#,
            OutputMode::Json,
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::SchemaInvalid);

        let err = interpret::<MatchAnalysis>(r#"{"match_score": 0}"#, OutputMode::Json).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyResult);

        let analysis: MatchAnalysis =
            interpret(r#"{"score": "64%", "gaps": ["Kubernetes"]}"#, OutputMode::Json).unwrap();
        assert_eq!(analysis.match_score, 64.0);
        assert_eq!(analysis.missing_skills, vec!["Kubernetes"]);
    }

    #[test]
    fn test_job_requirements_empty_is_rejected() {
        let err = interpret::<JobRequirements>(
            r#"{"required_skills": [], "experience_level": "  "}"#,
            OutputMode::Json,
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyResult);

        let requirements: JobRequirements = interpret(
            r#"{"requirements": ["Rust"], "seniority": "senior", "responsibilities": ["Own the API"]}"#,
            OutputMode::Json,
        )
        .unwrap();
        assert_eq!(requirements.required_skills, vec!["Rust"]);
        assert_eq!(requirements.experience_level, "senior");
        assert_eq!(requirements.job_responsibilities, vec!["Own the API"]);
    }
}
