//! Report archival commands.
//!
//! Each CI project archives its test reports with a pair of commands: one
//! creating a per-revision results directory, one copying a report file into
//! it. The directories are fixed per project and version, so a project is
//! described by an [`ArchiveProfile`] and all profiles are served by one
//! [`ArchiveSet`].
//!
//! Given a profile with key `KS`, the create command emits
//!
//! ```text
//! String pathDirReportKS = "<results_dir><value>/<target>";
//! new File(pathDirReportKS).mkdirs();
//! ```
//!
//! and the copy command emits
//!
//! ```text
//! File fOrigKS = new File("<report_dir><target>");
//! File fDestKS = new File(pathDirReportKS);
//! FileUtils.copyFileToDirectory(fOrigKS, fDestKS);
//! ```

use crate::commands::Operands;
use crate::ir::Statement;
use crate::traits::CommandSet;
use serde::{Deserialize, Serialize};

/// Archival directories of one CI project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveProfile {
    /// Suffix of the generated variable names; must be a Java identifier part.
    pub key: String,
    /// Command creating the results directory (target: subdirectory, value: revision).
    pub create_command: String,
    /// Command copying a report file (target: file name) into it.
    pub copy_command: String,
    /// Results root, the revision and subdirectory are appended to it.
    pub results_dir: String,
    /// Directory the report files are copied from.
    pub report_dir: String,
}

impl ArchiveProfile {
    pub fn new(
        key: impl Into<String>,
        create_command: impl Into<String>,
        copy_command: impl Into<String>,
        results_dir: impl Into<String>,
        report_dir: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            create_command: create_command.into(),
            copy_command: copy_command.into(),
            results_dir: results_dir.into(),
            report_dir: report_dir.into(),
        }
    }

    fn path_var(&self) -> String {
        format!("pathDirReport{}", self.key)
    }

    fn emit_create(&self, ops: &Operands<'_>) -> Vec<Statement> {
        let path = self.path_var();
        vec![
            Statement::line(format!(
                "String {path} = \"{}{}/{}\";",
                crate::interpolate::escape(&self.results_dir),
                ops.value.inner(),
                ops.target.inner()
            )),
            Statement::line(format!("new File({path}).mkdirs();")),
        ]
    }

    fn emit_copy(&self, ops: &Operands<'_>) -> Vec<Statement> {
        let key = &self.key;
        vec![
            Statement::line(format!(
                "File fOrig{key} = new File(\"{}{}\");",
                crate::interpolate::escape(&self.report_dir),
                ops.target.inner()
            )),
            Statement::line(format!("File fDest{key} = new File({});", self.path_var())),
            Statement::line(format!(
                "FileUtils.copyFileToDirectory(fOrig{key}, fDest{key});"
            )),
        ]
    }
}

/// All archive profiles known to a translation run.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSet {
    profiles: Vec<ArchiveProfile>,
}

impl ArchiveSet {
    pub fn new(profiles: Vec<ArchiveProfile>) -> Self {
        Self { profiles }
    }

    /// The eXo Platform CI profiles.
    #[cfg(feature = "archive-exo")]
    pub fn exo() -> Self {
        Self::new(exo_profiles())
    }

    pub fn push(&mut self, profile: ArchiveProfile) {
        self.profiles.push(profile);
    }

    pub fn profiles(&self) -> &[ArchiveProfile] {
        &self.profiles
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl CommandSet for ArchiveSet {
    fn name(&self) -> &str {
        "archive"
    }

    fn commands(&self) -> Vec<&str> {
        self.profiles
            .iter()
            .flat_map(|p| [p.create_command.as_str(), p.copy_command.as_str()])
            .collect()
    }

    fn emit(&self, ops: &Operands<'_>) -> Option<Vec<Statement>> {
        self.profiles.iter().find_map(|p| {
            if p.create_command == ops.command {
                Some(p.emit_create(ops))
            } else if p.copy_command == ops.command {
                Some(p.emit_copy(ops))
            } else {
                None
            }
        })
    }
}

#[cfg(feature = "archive-exo")]
fn exo_profiles() -> Vec<ArchiveProfile> {
    const TESTS_SITE: &str = "target/tests.exoplatform.org/";
    const SITE: &str = "target/site/";

    // (key, create, copy, home, results, run, site)
    let rows: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
        ("PLF30x", "eXoCreateFolderReportPLF30x", "eXocopyReportPLF30x", "SELENIUM-PLF3.0.X", "Commit_Result_PLF_3_0_6", "Run_Selenium_on_PLF_3_0_6", TESTS_SITE),
        ("PLF35x", "eXoCreateFolderReportPLF35x", "eXocopyReportPLF35x", "SELENIUM-PLF3.5.X", "Commit_Result_PLF_3_5_0_CR1", "Run_Selenium_on_PLF_3_5_0_CR1", TESTS_SITE),
        ("CS22X", "createReportCS22X", "copyReportCS22X", "SELENIUM-CS-CLIENT", "Commit_Result_CS_2_2_4_SNAPSHOT", "Run_Selenium_CS_2_2_4_SNAPSHOT", TESTS_SITE),
        ("CS21X", "createReportCS21X", "copyReportCS21X", "SELENIUM-CS-CLIENT", "Commit_Result_CS_2_1_6", "Run_Selenium_on_CS_2_1_6", TESTS_SITE),
        ("CS", "createReport_CS230", "copyReport_CS230", "SELENIUM-CS-CLIENT", "Commit_Result_CS_2_3_0_SNAPSHOT", "Run_Selenium_on_CS_2_3_0_SNAPSHOT", TESTS_SITE),
        ("KS", "createReportKS230", "copyReportKS230", "SELENIUM-KS-CLIENT", "Commit_Result_KS_2_3_0_SNAPSHOT", "Run_Selenium_on_KS_2_3_0_SNAPSHOT", TESTS_SITE),
        ("KS22X", "createReportKS22X", "copyReportKS22X", "SELENIUM-KS-CLIENT", "Commit_Result_KS_2_2_2", "Run_Selenium_on_KS_2_2_2", TESTS_SITE),
        ("KS21X", "createReportKS21X", "copyReportKS21X", "SELENIUM-KS-CLIENT", "Commit_Result_KS_2_1_6", "Run_Selenium_on_KS_2_1_6", TESTS_SITE),
        ("ECMS", "createReportECMS230GA", "copyReportECMS230GA", "SELENIUM-ECMS-CLIENT", "Commit_Result_ECMS_2_3_0_GA", "Run_Selenium_on_ECMS_2_3_0_GA", TESTS_SITE),
        ("ECMS21X", "createReportECMS216", "copyReportECMS216", "SELENIUM-ECMS-CLIENT", "Commit_Result_ECMS_2_1_6", "Run_Selenium_on_ECMS_2_1_6", TESTS_SITE),
        ("GATEIN", "ReporteXoGTN320", "copyReporteXoGTN320", "SELENIUM-GATEIN-CLIENT", "Commit_Result_eXoGTN_3_2_0_PLF", "Run_Selenium_eXoGTN_3_2_0_PLF", SITE),
        ("GTN3110", "ReporteXoGTN3110", "copyReporteXoGTN3110", "SELENIUM-GATEIN-CLIENT", "Commit_Result_eXoGTN_3_1_10_PLF", "Run_Selenium_eXoGTN_3_1_10_PLF", SITE),
        ("JbossGTN", "ReportJbossGTN", "copyReportJbossGTN", "SELENIUM-GATEIN-CLIENT", "Commit_Result_JBossGTN_3_2_0_M02", "Run_Selenium_JBossGTN_3_2_0_M02", SITE),
        ("WebOS200", "ReporteXoWebOS", "copyReporteXoWebOS", "SELENIUM-GATEIN-CLIENT", "Commit_Result_eXoWebOS_2_0_0", "Run_Selenium_WebOS_2_0_0", SITE),
        ("WebOS", "eXoCreateFolderReportWebOS", "eXocopyReportWebOS", "SELENIUM-GATEIN-CLIENT", "Commit_Result_eXoWebOS_2_2_0", "Run_Selenium_WebOS_2_2_0", TESTS_SITE),
        ("SOC", "eXoCreateFolderReportSOC", "eXocopyReportSOC", "SELENIUM-SOCIAL-CLIENT", "Commit_Result_SOC_1_3_0_SNAPSHOT", "Run_Selenium_on_SOC_1_3_0_SNAPSHOT", TESTS_SITE),
        ("SOC11X", "eXoCreateFolderReportSOC11X", "eXocopyReportSOC11X", "SELENIUM-SOCIAL-CLIENT", "Commit_Result_SOC_1_1_6", "Run_Selenium_on_SOC_1_1_6", TESTS_SITE),
        ("SOC12X", "eXoCreateFolderReportSOC12X", "eXocopyReportSOC12X", "SELENIUM-SOCIAL-CLIENT", "Commit_Result_SOC_1_2_3_SNAPSHOT", "Run_Selenium_SOC_1_2_3_SNAPSHOT", TESTS_SITE),
    ];

    rows.iter()
        .map(|&(key, create, copy, home, results, run, site)| {
            ArchiveProfile::new(
                key,
                create,
                copy,
                format!("/home/{home}/workspace/{results}/rev"),
                format!("/home/{home}/workspace/{run}/{site}"),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ArchiveProfile {
        ArchiveProfile::new(
            "KS",
            "createReportKS230",
            "copyReportKS230",
            "/home/ci/results/rev",
            "/home/ci/run/site/",
        )
    }

    #[test]
    fn test_create_interpolates_revision() {
        let set = ArchiveSet::new(vec![profile()]);
        let ops = Operands::new("createReportKS230", "${today}", "${rev}");
        let statements = set.emit(&ops).unwrap();
        assert_eq!(
            statements,
            vec![
                Statement::line(
                    r#"String pathDirReportKS = "/home/ci/results/rev" + rev + "/" + today + "";"#
                ),
                Statement::line("new File(pathDirReportKS).mkdirs();"),
            ]
        );
    }

    #[test]
    fn test_copy_emits_three_statements() {
        let set = ArchiveSet::new(vec![profile()]);
        let ops = Operands::new("copyReportKS230", "report.html", "");
        let statements = set.emit(&ops).unwrap();
        assert_eq!(statements.len(), 3);
        assert_eq!(
            statements[0],
            Statement::line(r#"File fOrigKS = new File("/home/ci/run/site/report.html");"#)
        );
    }

    #[test]
    fn test_unknown_command_not_handled() {
        let set = ArchiveSet::new(vec![profile()]);
        assert!(set.emit(&Operands::new("click", "x", "")).is_none());
    }

    #[test]
    #[cfg(feature = "archive-exo")]
    fn test_exo_profiles_are_distinct() {
        let set = ArchiveSet::exo();
        let commands = set.commands();
        let unique: std::collections::HashSet<_> = commands.iter().collect();
        assert_eq!(commands.len(), unique.len());
        assert_eq!(commands.len(), 36);

        let keys: std::collections::HashSet<_> = set.profiles().iter().map(|p| &p.key).collect();
        assert_eq!(keys.len(), set.profiles().len());
    }
}
