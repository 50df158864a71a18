//! ステージと microstack の対応表
//!
//! ステージ → microstack の順序付きリストと、microstack → ステージの逆引きを
//! 同じ列挙型の上で定義します。両者の整合性はテストで検証しています。

use crate::error::{CoreError, Result};
use std::fmt;
use std::str::FromStr;

/// デプロイステージ（実行順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Vpc,
    Core,
    Apps,
}

impl Stage {
    /// 全ステージ（bootstrap の実行順）
    pub const ALL: [Stage; 3] = [Stage::Vpc, Stage::Core, Stage::Apps];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Vpc => "vpc",
            Stage::Core => "core",
            Stage::Apps => "apps",
        }
    }

    /// このステージに属する microstack（デプロイ順）
    pub fn microstacks(self) -> &'static [Microstack] {
        use Microstack::*;
        match self {
            Stage::Vpc => &[Networking, Acls],
            Stage::Core => &[
                S3,
                Route53,
                Rds,
                Eks,
                OpenSearch,
                CloudFront,
                Certificates,
            ],
            Stage::Apps => &[EksAddons, HelmCharts, StorageClasses, IngressClasses],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStage(s.to_string()))
    }
}

/// 最小のデプロイ単位。1 つの Pulumi スタックに対応する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Microstack {
    Networking,
    Acls,
    S3,
    Route53,
    Rds,
    Eks,
    OpenSearch,
    CloudFront,
    Certificates,
    EksAddons,
    HelmCharts,
    StorageClasses,
    IngressClasses,
}

impl Microstack {
    pub const ALL: [Microstack; 13] = [
        Microstack::Networking,
        Microstack::Acls,
        Microstack::S3,
        Microstack::Route53,
        Microstack::Rds,
        Microstack::Eks,
        Microstack::OpenSearch,
        Microstack::CloudFront,
        Microstack::Certificates,
        Microstack::EksAddons,
        Microstack::HelmCharts,
        Microstack::StorageClasses,
        Microstack::IngressClasses,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Microstack::Networking => "networking",
            Microstack::Acls => "acls",
            Microstack::S3 => "s3",
            Microstack::Route53 => "route53",
            Microstack::Rds => "rds",
            Microstack::Eks => "eks",
            Microstack::OpenSearch => "opensearch",
            Microstack::CloudFront => "cloudfront",
            Microstack::Certificates => "certificates",
            Microstack::EksAddons => "eks-addons",
            Microstack::HelmCharts => "helm-charts",
            Microstack::StorageClasses => "storage-classes",
            Microstack::IngressClasses => "ingress-classes",
        }
    }

    /// 所属ステージ（逆引き）
    pub fn stage(self) -> Stage {
        match self {
            Microstack::Networking | Microstack::Acls => Stage::Vpc,
            Microstack::S3
            | Microstack::Route53
            | Microstack::Rds
            | Microstack::Eks
            | Microstack::OpenSearch
            | Microstack::CloudFront
            | Microstack::Certificates => Stage::Core,
            Microstack::EksAddons
            | Microstack::HelmCharts
            | Microstack::StorageClasses
            | Microstack::IngressClasses => Stage::Apps,
        }
    }
}

impl fmt::Display for Microstack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Microstack {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Microstack::ALL
            .into_iter()
            .find(|ms| ms.as_str() == s)
            .ok_or_else(|| CoreError::UnknownMicrostack(s.to_string()))
    }
}

/// ステージ名から microstack 一覧を取得（不明なステージは空）
pub fn microstacks_for(stage: &str) -> &'static [Microstack] {
    stage
        .parse::<Stage>()
        .map(Stage::microstacks)
        .unwrap_or(&[])
}

/// microstack 名から所属ステージを取得
pub fn stage_for(microstack: &str) -> Option<Stage> {
    microstack.parse::<Microstack>().ok().map(Microstack::stage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(stage: &str) -> Vec<&'static str> {
        microstacks_for(stage).iter().map(|m| m.as_str()).collect()
    }

    #[test]
    fn test_stage_table() {
        assert_eq!(names("vpc"), vec!["networking", "acls"]);
        assert_eq!(
            names("core"),
            vec![
                "s3",
                "route53",
                "rds",
                "eks",
                "opensearch",
                "cloudfront",
                "certificates"
            ]
        );
        assert_eq!(
            names("apps"),
            vec![
                "eks-addons",
                "helm-charts",
                "storage-classes",
                "ingress-classes"
            ]
        );
    }

    #[test]
    fn test_unknown_stage_is_empty() {
        assert!(microstacks_for("db").is_empty());
        assert!(microstacks_for("").is_empty());
        assert!(microstacks_for("VPC").is_empty());
    }

    /// 両方向の表が食い違っていないこと
    #[test]
    fn test_tables_are_consistent() {
        let mut seen = Vec::new();
        for stage in Stage::ALL {
            for ms in stage.microstacks() {
                assert_eq!(ms.stage(), stage, "{} は {} に属するはず", ms, stage);
                assert!(!seen.contains(ms), "{} が重複しています", ms);
                seen.push(*ms);
            }
        }
        assert_eq!(seen.len(), Microstack::ALL.len());
        for ms in Microstack::ALL {
            assert!(ms.stage().microstacks().contains(&ms));
        }
    }

    #[test]
    fn test_stage_for() {
        assert_eq!(stage_for("acls"), Some(Stage::Vpc));
        assert_eq!(stage_for("cloudfront"), Some(Stage::Core));
        assert_eq!(stage_for("ingress-classes"), Some(Stage::Apps));
        assert_eq!(stage_for("lambda"), None);
    }

    #[test]
    fn test_parse_round_trip_names() {
        for ms in Microstack::ALL {
            assert_eq!(ms.as_str().parse::<Microstack>().unwrap(), ms);
        }
        assert!(matches!(
            "dns".parse::<Stage>(),
            Err(CoreError::UnknownStage(name)) if name == "dns"
        ));
    }
}
