/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use smithy_query::QuerySerializer;
use smithy_types::serialize::{SerializableStruct, ShapeSerializer};

smithy_types::shape! {
    pub struct Tag {
        key: String => "Key",
        value: String => "Value",
    }
}

smithy_types::shape! {
    pub struct ScalingConfiguration {
        min_capacity: i32 => "MinCapacity",
        auto_pause: bool => "AutoPause",
        seconds_until_auto_pause: i32 => "SecondsUntilAutoPause",
    }
}

smithy_types::shape! {
    pub struct CreateClusterInput {
        db_cluster_identifier: String => "DBClusterIdentifier",
        availability_zones: Vec<String> => "AvailabilityZones" ["AvailabilityZone"],
        backtrack_window: i64 => "BacktrackWindow",
        scaling_configuration: ScalingConfiguration => "ScalingConfiguration",
        tags: Vec<Tag> => "Tags" ["Tag"],
        enable_cloudwatch_logs_exports: Vec<String> => "EnableCloudwatchLogsExports",
    }
}

fn serialize(input: &CreateClusterInput) -> String {
    let mut ser = QuerySerializer::new("CreateDBCluster", "2014-10-31");
    SerializableStruct::serialize(input, &mut ser).unwrap();
    ser.finish().unwrap()
}

#[test]
fn only_present_members_are_written() {
    let input = CreateClusterInput::default().with_db_cluster_identifier("my-cluster");
    assert_eq!(
        serialize(&input),
        "Action=CreateDBCluster&Version=2014-10-31&DBClusterIdentifier=my-cluster"
    );
}

#[test]
fn members_follow_declaration_order() {
    let input = CreateClusterInput::default()
        .with_tags(vec![
            Tag::default().with_key("env").with_value("prod"),
            Tag::default().with_key("team"),
        ])
        .with_scaling_configuration(
            ScalingConfiguration::default()
                .with_min_capacity(2)
                .with_auto_pause(true),
        )
        .with_backtrack_window(3600)
        .with_availability_zones(vec!["us-east-1a".to_owned(), "us-east-1b".to_owned()])
        .with_db_cluster_identifier("my-cluster");

    assert_eq!(
        serialize(&input),
        "Action=CreateDBCluster&Version=2014-10-31\
         &DBClusterIdentifier=my-cluster\
         &AvailabilityZones.AvailabilityZone.1=us-east-1a\
         &AvailabilityZones.AvailabilityZone.2=us-east-1b\
         &BacktrackWindow=3600\
         &ScalingConfiguration.MinCapacity=2\
         &ScalingConfiguration.AutoPause=true\
         &Tags.Tag.1.Key=env\
         &Tags.Tag.1.Value=prod\
         &Tags.Tag.2.Key=team"
    );
}

#[test]
fn default_list_member_name() {
    let input = CreateClusterInput::default()
        .with_enable_cloudwatch_logs_exports(vec!["audit".to_owned(), "error".to_owned()]);
    assert_eq!(
        serialize(&input),
        "Action=CreateDBCluster&Version=2014-10-31\
         &EnableCloudwatchLogsExports.member.1=audit\
         &EnableCloudwatchLogsExports.member.2=error"
    );
}

#[test]
fn present_empty_list_and_empty_struct() {
    let input = CreateClusterInput::default()
        .with_tags(Vec::<Tag>::new())
        .with_scaling_configuration(ScalingConfiguration::default());
    assert_eq!(
        serialize(&input),
        "Action=CreateDBCluster&Version=2014-10-31&Tags="
    );
}
